use crate::core::Kata;
use crate::utils::error::Result;

/// Carries the latest multiple of ten forward over the elements that follow it.
///
/// Elements before the first multiple of ten are left as they are. Zero counts
/// as a multiple of ten and is carried like any other.
pub fn propagate_multiples_of_ten(sequence: &[i32]) -> Vec<i32> {
    let mut carry: Option<i32> = None;

    sequence
        .iter()
        .map(|&value| {
            if value % 10 == 0 {
                carry = Some(value);
                value
            } else {
                carry.unwrap_or(value)
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PropagateTens;

impl Kata for PropagateTens {
    type Input = [i32];
    type Output = Vec<i32>;

    fn name(&self) -> &'static str {
        "propagate-tens"
    }

    fn solve(&self, input: &[i32]) -> Result<Vec<i32>> {
        let output = propagate_multiples_of_ten(input);
        let carried = input.iter().zip(&output).filter(|(a, b)| a != b).count();
        tracing::debug!("Carried multiples of ten into {} of {} slots", carried, input.len());
        Ok(output)
    }

    // Every value is followed by a single space, the trailing one included.
    fn render(&self, output: &Vec<i32>) -> String {
        output.iter().map(|value| format!("{} ", value)).collect()
    }
}
