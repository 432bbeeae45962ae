pub const COUNT_DURATION_MS: f64 = 2_000.0;
pub const TICK_MS: u32 = 16;
pub const STATS_THRESHOLD: f64 = 0.5;
pub const COUNTED_CLASS: &str = "counted";

/// Parses the leading integer of a stat heading such as `"25+"`; anything else counts to zero.
pub fn parse_target(text: &str) -> u32 {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Count-up animation ticking every [`TICK_MS`] until it reaches the target.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCounter {
    target: u32,
    count: f64,
    increment: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    Running(String),
    Done(String),
}

impl StatCounter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            count: 0.0,
            increment: f64::from(target) / (COUNT_DURATION_MS / f64::from(TICK_MS)),
        }
    }

    pub fn tick(&mut self) -> Tick {
        self.count += self.increment;
        if self.count >= f64::from(self.target) {
            Tick::Done(format!("{}+", self.target))
        } else {
            Tick::Running(format!("{}+", self.count.floor()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_digits() {
        assert_eq!(parse_target("50+"), 50);
        assert_eq!(parse_target(" 7 projects"), 7);
        assert_eq!(parse_target("many"), 0);
    }

    #[test]
    fn counts_up_and_finishes_on_target() {
        let mut counter = StatCounter::new(125);
        let mut ticks = 0;
        let last = loop {
            ticks += 1;
            match counter.tick() {
                Tick::Running(text) => assert!(text.ends_with('+')),
                Tick::Done(text) => break text,
            }
            assert!(ticks < 1_000);
        };
        assert_eq!(last, "125+");
        assert_eq!(ticks, 125);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        assert_eq!(StatCounter::new(0).tick(), Tick::Done("0+".into()));
    }
}
