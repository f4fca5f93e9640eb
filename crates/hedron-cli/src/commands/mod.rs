//! CLI subcommands

pub mod encode;
pub mod selector;

use hedron_sdk::FunctionSelector;

use crate::CliError;

/// Build a selector from a bare name or a full signature, plus any extra
/// `--type` arguments
pub(crate) fn build_selector(function: &str, types: &[String]) -> Result<FunctionSelector, CliError> {
    let mut selector = if function.contains('(') {
        FunctionSelector::parse_signature(function)?
    } else {
        let name = function.trim();
        if name.is_empty() {
            return Err(CliError::InvalidInput("Function name is empty".to_string()));
        }
        FunctionSelector::new(name)
    };

    for ty in types {
        selector.add_param_type(ty)?;
    }
    Ok(selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_selector_from_name_and_types() {
        let selector = build_selector("f", &["uint32".to_string(), "string[]".to_string()]).unwrap();
        assert_eq!(selector.to_signature(), "f(uint32,string[])");
    }

    #[test]
    fn test_build_selector_from_signature() {
        let selector = build_selector("f(uint32,bytes)", &["string".to_string()]).unwrap();
        assert_eq!(selector.to_signature(), "f(uint32,bytes,string)");
    }

    #[test]
    fn test_build_selector_rejects_bad_input() {
        assert!(matches!(build_selector("  ", &[]), Err(CliError::InvalidInput(_))));
        assert!(matches!(
            build_selector("f", &["address".to_string()]),
            Err(CliError::Sdk(_))
        ));
        assert!(matches!(
            build_selector("(uint32)", &[]),
            Err(CliError::Sdk(hedron_sdk::SdkError::MissingFunctionName))
        ));
    }
}
