use std::io::{Write, stdout};

use base64::Engine;

use crate::app::{App, Message, Model, ToastLevel};
use crate::locale;

impl App {
    /// Run the side effects a message implies, after the pure update has
    /// produced the new model. Clipboard access is the only effect here;
    /// everything else the app does is state.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if matches!(msg, Message::CopyBuffer) {
            if model.buffer.is_empty() {
                return;
            }
            match copy_to_clipboard(&model.buffer) {
                Ok(()) => model.mark_copied(),
                Err(err) => {
                    tracing::warn!("clipboard copy failed: {err}");
                    model.show_toast(
                        ToastLevel::Error,
                        format!("{}: {err}", locale::ui(model.lang).copy_hint),
                    );
                }
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        if copy_to_pbcopy(text).is_ok() {
            return Ok(());
        }
    }
    copy_to_clipboard_osc52(text)
}

#[cfg(target_os = "macos")]
fn copy_to_pbcopy(text: &str) -> std::io::Result<()> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("pbcopy").stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other("pbcopy failed"))
    }
}

/// OSC 52 works over SSH and in most modern terminals, so it is the
/// portable fallback.
fn copy_to_clipboard_osc52(text: &str) -> std::io::Result<()> {
    let osc = osc52_sequence(text);
    let mut out = stdout();
    out.write_all(osc.as_bytes())?;
    out.flush()
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}
