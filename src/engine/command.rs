//! Recognition engine backed by an external command.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::core::{DEFAULT_ENGINE_COMMAND, ENGINE_ENV_VAR};
use crate::domain::TextDetection;

use super::{EngineError, EngineInfo, RecognitionEngine};

/// A recognition engine that shells out to an external command.
///
/// The command is invoked as `<program> [args...] <image_path>` and must
/// print a JSON array of `{"coords": [[x, y], ...], "text": ...,
/// "confidence": ...}` objects on stdout, exiting with status 0. The
/// engine's stderr is captured and surfaced only through error diagnostics;
/// it never reaches this program's stdout.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    /// Creates an engine from a program name with no leading arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Adds leading arguments that are passed before the image path.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Parses a whitespace-separated command specification.
    ///
    /// The first token is the program, the remaining tokens become leading
    /// arguments. Quoting is not supported; an argument that must contain
    /// whitespace has to be wrapped in a small launcher script instead.
    pub fn from_shell(spec: &str) -> Result<Self, EngineError> {
        let mut tokens = spec.split_whitespace();
        let program = tokens.next().ok_or(EngineError::EmptyCommand)?;
        Ok(Self::new(program).with_args(tokens))
    }

    /// Resolves the engine command for an invocation.
    ///
    /// Priority: the explicit override (CLI flag), then the `DUO_OCR_ENGINE`
    /// environment variable, then the built-in default command.
    pub fn resolve(override_spec: Option<&str>) -> Result<Self, EngineError> {
        let spec = match override_spec {
            Some(spec) => spec.to_string(),
            None => std::env::var(ENGINE_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_ENGINE_COMMAND.to_string()),
        };
        Self::from_shell(&spec)
    }
}

/// Parses an engine stdout payload into detections.
fn parse_detections(stdout: &[u8]) -> Result<Vec<TextDetection>, EngineError> {
    serde_json::from_slice(stdout).map_err(EngineError::Parse)
}

impl RecognitionEngine for CommandEngine {
    fn info(&self) -> EngineInfo {
        let mut invocation = vec![self.program.clone()];
        invocation.extend(self.args.iter().cloned());
        invocation.push("<image>".to_string());
        EngineInfo::new(&self.program, invocation.join(" "))
    }

    fn recognize(&self, path: &Path) -> Result<Vec<TextDetection>, EngineError> {
        debug!("invoking {} on {}", self.program, path.display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|source| EngineError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(EngineError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let detections = parse_detections(&output.stdout)?;
        debug!(
            "{} returned {} detection(s) for {}",
            self.program,
            detections.len(),
            path.display()
        );
        Ok(detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shell_splits_program_and_args() {
        let engine = CommandEngine::from_shell("paddle-worker --lang ch").unwrap();
        assert_eq!(engine.program, "paddle-worker");
        assert_eq!(engine.args, vec!["--lang", "ch"]);
    }

    #[test]
    fn test_from_shell_rejects_empty_spec() {
        assert!(matches!(
            CommandEngine::from_shell("   "),
            Err(EngineError::EmptyCommand)
        ));
    }

    #[test]
    fn test_resolve_prefers_explicit_override() {
        let engine = CommandEngine::resolve(Some("custom-engine -v")).unwrap();
        assert_eq!(engine.program, "custom-engine");
        assert_eq!(engine.args, vec!["-v"]);
    }

    #[test]
    fn test_info_describes_invocation() {
        let engine = CommandEngine::new("worker").with_args(["--fast"]);
        let info = engine.info();
        assert_eq!(info.name, "worker");
        assert_eq!(info.description, "worker --fast <image>");
    }

    #[test]
    fn test_parse_detections_payload() {
        let payload = br#"[{"coords": [[0, 0], [4, 0]], "text": "ok", "confidence": 0.7}]"#;
        let detections = parse_detections(payload).unwrap();
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].text, "ok");
    }

    #[test]
    fn test_parse_detections_rejects_non_array() {
        assert!(matches!(
            parse_detections(b"{\"coords\": []}"),
            Err(EngineError::Parse(_))
        ));
        assert!(matches!(
            parse_detections(b"not json at all"),
            Err(EngineError::Parse(_))
        ));
        // An error-shaped payload is not a detection array either.
        assert!(matches!(
            parse_detections(br#"[{"error": "boom"}]"#),
            Err(EngineError::Parse(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_recognize_spawn_failure() {
        let engine = CommandEngine::new("/nonexistent/duo-ocr-test-binary");
        let err = engine.recognize(Path::new("image.png")).unwrap_err();
        assert!(matches!(err, EngineError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_recognize_nonzero_exit() {
        let engine = CommandEngine::new("false");
        let err = engine.recognize(Path::new("image.png")).unwrap_err();
        assert!(matches!(err, EngineError::Failed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_recognize_unparsable_stdout() {
        // echo prints the image path back, which is not a detection array.
        let engine = CommandEngine::new("echo");
        let err = engine.recognize(Path::new("image.png")).unwrap_err();
        assert!(matches!(err, EngineError::Parse(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_recognize_empty_array() {
        let engine = CommandEngine::new("sh").with_args(["-c", "echo []"]);
        let detections = engine.recognize(Path::new("ignored.png")).unwrap();
        assert!(detections.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_recognize_populated_array() {
        let script = r#"echo '[{"coords": [[1, 2], [3, 4]], "text": "line", "confidence": 0.9}]'"#;
        let engine = CommandEngine::new("sh").with_args(["-c", script]);
        let detections = engine.recognize(Path::new("ignored.png")).unwrap();
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].text, "line");
        assert_eq!(detections[0].confidence, 0.9);
    }
}
