//! Error handling and exit codes.

use dicecalc_core::constants::exit_codes;
use dicecalc_core::DiceError;

/// Exit code for a dice calculation error.
pub fn handle_error(err: &DiceError) -> i32 {
    match err {
        DiceError::InvalidArgument(_) | DiceError::Config(_) => exit_codes::ERROR_CONFIG,
        DiceError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        DiceError::Arithmetic(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error, looking through `anyhow` context.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<DiceError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&DiceError::InvalidArgument("n".into())), 4);
        assert_eq!(handle_error(&DiceError::Config("bad".into())), 4);
        assert_eq!(handle_error(&DiceError::Arithmetic("div".into())), 1);
        assert_eq!(
            handle_error(&DiceError::Mismatch {
                estimate: 1.0,
                exact: 2.0,
                tolerance: 0.1
            }),
            3
        );
    }

    #[test]
    fn exit_code_through_context() {
        let err = anyhow::Error::new(DiceError::InvalidArgument("n = 0".into()))
            .context("validating configuration");
        assert_eq!(exit_code(&err), 4);
        assert_eq!(exit_code(&anyhow::anyhow!("io failure")), 1);
    }
}
