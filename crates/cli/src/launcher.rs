// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Child process execution with live stderr forwarding.
//!
//! A reader thread drains the child's stderr into a channel; the control
//! thread forwards each chunk as it arrives and waits on the channel, so a
//! deadline can interrupt a hung child.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crossbeam_channel::{RecvTimeoutError, Sender, unbounded};

use crate::batch::CommandLine;
use crate::error::{Error, Result};
use crate::platform::Platform;

/// Where the child's stdout goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdoutMode {
    /// `php -l` prints "No syntax errors detected" per file; drop it.
    Discard,
    /// The aggregate helper prints its own report.
    Inherit,
}

/// One child process to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub stdout: StdoutMode,
    /// Pass `args` to the program unquoted. `cmd.exe` parses its own command
    /// line, so MSVC-style quoting would garble the escaped paths.
    pub verbatim: bool,
}

impl Invocation {
    /// Run a command line through the host shell.
    pub fn shell(line: &CommandLine) -> Self {
        Self::shell_for(line.as_str(), Platform::host())
    }

    /// On POSIX the shell `exec`s the command so a timeout kills the
    /// interpreter rather than only the shell.
    pub fn shell_for(line: &str, platform: Platform) -> Self {
        let (shell, flag) = platform.shell();
        let script = match platform {
            Platform::Posix => format!("exec {line}"),
            Platform::Windows => line.to_string(),
        };
        Self {
            program: shell.to_string(),
            args: vec![flag.to_string(), script],
            stdout: StdoutMode::Discard,
            verbatim: platform == Platform::Windows,
        }
    }

    /// Run a program directly, without a shell.
    pub fn direct(program: impl Into<String>, args: Vec<String>, stdout: StdoutMode) -> Self {
        Self {
            program: program.into(),
            args,
            stdout,
            verbatim: false,
        }
    }
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Exit code; `None` when killed by a signal.
    pub exit_code: Option<i32>,
    /// Bytes the child wrote to stderr.
    pub stderr_bytes: u64,
    /// Killed after exceeding the timeout.
    pub timed_out: bool,
}

impl Completion {
    pub fn success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

/// Runs invocations one at a time.
pub trait Launcher {
    /// Run `invocation` to completion, forwarding its stderr.
    fn launch(&mut self, invocation: &Invocation) -> Result<Completion>;
}

/// Launcher backed by real child processes.
pub struct ProcessLauncher<W = io::Stderr> {
    root: PathBuf,
    timeout: Option<Duration>,
    sink: W,
}

impl ProcessLauncher<io::Stderr> {
    /// Forward child stderr to our own stderr.
    pub fn new(root: &Path, timeout: Option<Duration>) -> Self {
        Self::with_sink(root, timeout, io::stderr())
    }
}

impl<W: Write> ProcessLauncher<W> {
    pub fn with_sink(root: &Path, timeout: Option<Duration>, sink: W) -> Self {
        Self {
            root: root.to_path_buf(),
            timeout,
            sink,
        }
    }

    #[cfg(test)]
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn forward(&mut self, chunk: &[u8]) {
        // A closed stderr must not abort the check itself.
        if self.sink.write_all(chunk).is_ok() {
            self.sink.flush().ok();
        }
    }
}

impl<W: Write> Launcher for ProcessLauncher<W> {
    fn launch(&mut self, invocation: &Invocation) -> Result<Completion> {
        let stdout = match invocation.stdout {
            StdoutMode::Discard => Stdio::null(),
            StdoutMode::Inherit => Stdio::inherit(),
        };
        let mut command = Command::new(&invocation.program);
        push_args(&mut command, invocation);
        let mut child = command
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::Internal("child stderr was not captured".to_string()))?;
        let (tx, rx) = unbounded();
        let reader = std::thread::spawn(move || read_chunks(stderr, tx));

        let deadline = self.timeout.map(|t| Instant::now() + t);
        let mut stderr_bytes = 0u64;
        let mut timed_out = false;
        loop {
            let received = match deadline {
                Some(deadline) => rx.recv_deadline(deadline),
                None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };
            match received {
                Ok(chunk) => {
                    tracing::trace!("stderr chunk of {} bytes", chunk.len());
                    stderr_bytes += chunk.len() as u64;
                    self.forward(&chunk);
                }
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {
                    timed_out = true;
                    child.kill().ok();
                    break;
                }
            }
        }

        let status = child.wait().map_err(|source| Error::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

        if timed_out {
            // Grandchildren may still hold the pipe; keep what already arrived
            // and leave the reader thread behind.
            for chunk in rx.try_iter() {
                stderr_bytes += chunk.len() as u64;
                self.forward(&chunk);
            }
            if let Some(timeout) = self.timeout {
                let message = format!("Command timed out after {:?}\n", timeout);
                self.forward(message.as_bytes());
            }
        } else if reader.join().is_err() {
            return Err(Error::Internal("stderr reader thread panicked".to_string()));
        }

        Ok(Completion {
            exit_code: status.code(),
            stderr_bytes,
            timed_out,
        })
    }
}

#[cfg(windows)]
fn push_args(command: &mut Command, invocation: &Invocation) {
    use std::os::windows::process::CommandExt;
    if invocation.verbatim {
        for arg in &invocation.args {
            command.raw_arg(arg);
        }
    } else {
        command.args(&invocation.args);
    }
}

#[cfg(not(windows))]
fn push_args(command: &mut Command, invocation: &Invocation) {
    command.args(&invocation.args);
}

/// Read `source` to EOF, sending each chunk as soon as it is read.
fn read_chunks(mut source: impl Read, tx: Sender<Vec<u8>>) {
    let mut buf = [0u8; 8192];
    loop {
        match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                if tx.send(buf[..n].to_vec()).is_err() {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
