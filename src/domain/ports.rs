use crate::utils::error::Result;
use serde::Serialize;

/// One exercise algorithm: a typed input, a serializable answer and the
/// plain-text form the fixed-input binaries print.
pub trait Kata {
    type Input: ?Sized;
    type Output: Serialize;

    fn name(&self) -> &'static str;
    fn solve(&self, input: &Self::Input) -> Result<Self::Output>;
    fn render(&self, output: &Self::Output) -> String;
}
