//! Line input for the REPL
//!
//! Lines are read on a dedicated OS thread and handed to the REPL over a
//! channel. A read that never completes then blocks only that thread, so
//! Ctrl+C and runtime shutdown do not wait for the next line of input.

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;
use tracing::debug;

/// Lines read ahead of the REPL
const LINE_BUFFER: usize = 16;

// == Input Lines ==
/// Receiving end of a line reader thread.
#[derive(Debug)]
pub struct InputLines {
    rx: mpsc::Receiver<io::Result<String>>,
}

impl InputLines {
    /// Waits for the next line, without its line ending.
    ///
    /// Returns `Ok(None)` at end of input.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.rx.recv().await.transpose()
    }
}

// == Spawn Line Reader ==
/// Reads `reader` line by line on its own thread.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of ending
/// the input. The thread stops at end of input, after the first read error,
/// or once the returned [`InputLines`] has been dropped.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<InputLines>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("pokedex-input".to_string())
        .spawn(move || read_lines(reader, tx))?;

    Ok(InputLines { rx })
}

fn read_lines<R: BufRead>(mut reader: R, tx: mpsc::Sender<io::Result<String>>) {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let line = match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => Ok(decode_line(&buf)),
            Err(err) => Err(err),
        };

        let failed = line.is_err();
        if tx.blocking_send(line).is_err() || failed {
            break;
        }
    }

    debug!("Input reader finished");
}

/// Strips the line ending and replaces invalid UTF-8.
pub fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line_strips_line_endings() {
        assert_eq!(decode_line(b"map\n"), "map");
        assert_eq!(decode_line(b"map\r\n"), "map");
        assert_eq!(decode_line(b"map"), "map");
        assert_eq!(decode_line(b"\n"), "");
    }

    #[test]
    fn test_decode_line_replaces_invalid_utf8() {
        assert_eq!(decode_line(b"\xff\xfe\n"), "\u{FFFD}\u{FFFD}");
        assert_eq!(decode_line(b"catch pidg\xffey\n"), "catch pidg\u{FFFD}ey");
    }

    #[tokio::test]
    async fn test_reader_yields_lines_then_end_of_input() {
        let mut lines = spawn_line_reader(&b"help\n\xff\nexit"[..]).unwrap();

        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("help"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("\u{FFFD}"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("exit"));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }
}
