use crate::core::{Kata, OutputFormat};
use crate::utils::error::Result;

pub struct KataEngine<K: Kata> {
    kata: K,
    format: OutputFormat,
}

impl<K: Kata> KataEngine<K> {
    pub fn new(kata: K) -> Self {
        Self::with_format(kata, OutputFormat::Text)
    }

    pub fn with_format(kata: K, format: OutputFormat) -> Self {
        Self { kata, format }
    }

    /// Solves `input` and renders the answer in the configured format.
    pub fn run(&self, input: &K::Input) -> Result<String> {
        let name = self.kata.name();
        tracing::info!("Running kata {}", name);

        let output = self.kata.solve(input)?;

        let rendered = match self.format {
            OutputFormat::Text => self.kata.render(&output),
            OutputFormat::Json => serde_json::to_string(&output)?,
        };
        tracing::debug!("Kata {} produced {} bytes of {:?} output", name, rendered.len(), self.format);

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{anagram::Anagram, digits::LargestDigit, tens::PropagateTens, AnagramInput};
    use crate::utils::error::KataError;

    #[test]
    fn test_run_text_output() {
        let engine = KataEngine::new(LargestDigit);
        assert_eq!(engine.run(&10).unwrap(), "1");
    }

    #[test]
    fn test_run_json_output() {
        let engine = KataEngine::with_format(PropagateTens, OutputFormat::Json);
        assert_eq!(engine.run(&[5, 10, 3][..]).unwrap(), "[5,10,10]");

        let engine = KataEngine::with_format(Anagram, OutputFormat::Json);
        let input = AnagramInput {
            left: "ab".to_string(),
            right: "ba".to_string(),
        };
        let json: serde_json::Value = serde_json::from_str(&engine.run(&input).unwrap()).unwrap();
        assert_eq!(json["is_anagram"], serde_json::json!(true));
        assert_eq!(json["left"]["a"], serde_json::json!(1));
    }

    #[test]
    fn test_run_propagates_kata_errors() {
        let engine = KataEngine::new(LargestDigit);
        assert!(matches!(
            engine.run(&-1),
            Err(KataError::NegativeInput { value: -1 })
        ));
    }
}
