use super::settings::UnknownStatePolicy;
use log::trace;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Increase,
    Decrease,
}

/// Plan the relative steps needed to move from `known` to `target`.
///
/// # Arguments
/// * `intervals` - Number of steps the value range is divided into
/// * `target` - Wanted step index
/// * `known` - Current step index, `None` if unknown
/// * `policy` - What to do when the current step is unknown
///
/// Both indices are clamped to `0..intervals`.
pub fn plan_steps(
    intervals: u8,
    target: u8,
    known: Option<u8>,
    policy: UnknownStatePolicy,
) -> Vec<Step> {
    let max = intervals.saturating_sub(1);
    let target = target.min(max);
    let plan = match known {
        Some(known) => {
            let known = known.min(max);
            if target > known {
                vec![Step::Increase; usize::from(target - known)]
            } else {
                vec![Step::Decrease; usize::from(known - target)]
            }
        }
        None => match policy {
            UnknownStatePolicy::Reset => {
                let mut plan = vec![Step::Decrease; usize::from(intervals)];
                plan.extend(std::iter::repeat(Step::Increase).take(usize::from(target)));
                plan
            }
            UnknownStatePolicy::AssumeFloor => vec![Step::Increase; usize::from(target)],
            UnknownStatePolicy::Skip => Vec::new(),
        },
    };
    trace!(
        "Step plan {:?} -> {}: {} steps",
        known,
        target,
        plan.len()
    );
    plan
}

#[cfg(test)]
mod test {
    use super::{plan_steps, Step};
    use crate::formatter::settings::UnknownStatePolicy;

    #[test]
    fn known_step_test() {
        let intervals = 12;
        for k in 0..intervals {
            for t in 0..intervals {
                let plan = plan_steps(intervals, t, Some(k), UnknownStatePolicy::Reset);
                assert_eq!(plan.len(), usize::from(t.abs_diff(k)));
                if t > k {
                    assert!(plan.iter().all(|s| *s == Step::Increase));
                } else {
                    assert!(plan.iter().all(|s| *s == Step::Decrease));
                }
            }
        }
    }

    #[test]
    fn clamp_test() {
        let plan = plan_steps(12, 40, Some(0), UnknownStatePolicy::Reset);
        assert_eq!(plan, vec![Step::Increase; 11]);
        let plan = plan_steps(12, 0, Some(200), UnknownStatePolicy::Reset);
        assert_eq!(plan, vec![Step::Decrease; 11]);
        assert!(plan_steps(12, 20, Some(30), UnknownStatePolicy::Reset).is_empty());
    }

    #[test]
    fn unknown_step_test() {
        let plan = plan_steps(12, 4, None, UnknownStatePolicy::Reset);
        assert_eq!(plan.len(), 16);
        assert!(plan[..12].iter().all(|s| *s == Step::Decrease));
        assert!(plan[12..].iter().all(|s| *s == Step::Increase));

        let plan = plan_steps(12, 4, None, UnknownStatePolicy::AssumeFloor);
        assert_eq!(plan, vec![Step::Increase; 4]);

        assert!(plan_steps(12, 4, None, UnknownStatePolicy::Skip).is_empty());
    }
}
