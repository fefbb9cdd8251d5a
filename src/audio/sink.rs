//! `rodio`-backed voices.
//!
//! Opening a voice starts fetching its source on a helper thread so the
//! event loop never waits on the network. Once the bytes arrive they are
//! decoded into a `Sink` on the shared output mixer, playing or paused
//! according to the last request.

use std::io::Cursor;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use rodio::mixer::Mixer;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use url::Url;

use crate::error::{Error, Result};

use super::backend::{AudioBackend, Voice};
use super::types::VoiceEvent;

pub struct RodioBackend {
    stream: OutputStream,
    http: Client,
}

impl RodioBackend {
    /// Open the default output device. `fetch_timeout` bounds each remote
    /// source download.
    pub fn open_default(fetch_timeout: Duration) -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| Error::Audio(format!("no audio output device: {e}")))?;
        // rodio logs to stderr when the stream is dropped; stderr is our log channel.
        stream.log_on_drop(false);

        let http = Client::builder()
            .timeout(fetch_timeout)
            .build()
            .map_err(|e| Error::Audio(e.to_string()))?;

        Ok(Self { stream, http })
    }
}

impl AudioBackend for RodioBackend {
    type Voice = RodioVoice;

    fn open(&mut self, source: &str) -> RodioVoice {
        let (tx, rx) = mpsc::channel();
        let http = self.http.clone();
        let src = source.to_string();
        thread::spawn(move || {
            // The voice may be gone by now; nobody is left to tell.
            let _ = tx.send(fetch(&http, &src).map_err(|e| e.to_string()));
        });

        RodioVoice {
            source: source.to_string(),
            mixer: self.stream.mixer().clone(),
            incoming: Some(rx),
            sink: None,
            failure: None,
            pending: Vec::new(),
            paused: true,
            ended: false,
        }
    }
}

pub struct RodioVoice {
    source: String,
    mixer: Mixer,
    incoming: Option<Receiver<std::result::Result<Vec<u8>, String>>>,
    sink: Option<Sink>,
    failure: Option<String>,
    pending: Vec<VoiceEvent>,
    paused: bool,
    ended: bool,
}

/// Read the bytes behind `source`: `http(s)` over the network, `file://`
/// and bare paths from disk.
fn fetch(http: &Client, source: &str) -> Result<Vec<u8>> {
    let url = match Url::parse(source) {
        Ok(url) => url,
        Err(_) => return Ok(std::fs::read(source)?),
    };

    match url.scheme() {
        "http" | "https" => {
            let bytes = http
                .get(url)
                .send()
                .and_then(|r| r.error_for_status())
                .and_then(|r| r.bytes())
                .map_err(|e| Error::Audio(format!("fetching {source}: {e}")))?;
            Ok(bytes.to_vec())
        }
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| Error::Audio(format!("not a local path: {source}")))?;
            Ok(std::fs::read(path)?)
        }
        other => Err(Error::Audio(format!("unsupported scheme `{other}`"))),
    }
}

impl RodioVoice {
    /// Take the fetched bytes if they have arrived and build the `Sink`.
    fn receive(&mut self) {
        let Some(rx) = self.incoming.as_ref() else {
            return;
        };
        let fetched = match rx.try_recv() {
            Ok(fetched) => fetched,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(format!("fetch of {} was lost", self.source)),
        };
        self.incoming = None;

        if let Err(reason) = fetched.and_then(|bytes| self.start_sink(bytes)) {
            // While paused the failure waits for the next `play`.
            if !self.paused {
                self.pending.push(VoiceEvent::Failed {
                    reason: reason.clone(),
                });
                self.paused = true;
            }
            self.failure = Some(reason);
        }
    }

    fn start_sink(&mut self, bytes: Vec<u8>) -> std::result::Result<(), String> {
        debug!("fetched {} bytes from {}", bytes.len(), self.source);

        let decoder = Decoder::new(Cursor::new(bytes))
            .map_err(|e| format!("cannot decode {}: {e}", self.source))?;
        self.pending.push(VoiceEvent::Loaded {
            duration: decoder.total_duration(),
        });

        let sink = Sink::connect_new(&self.mixer);
        sink.append(decoder);
        if self.paused {
            sink.pause();
        }
        self.sink = Some(sink);
        Ok(())
    }
}

impl Voice for RodioVoice {
    fn source(&self) -> &str {
        &self.source
    }

    /// Resume, or ask for playback as soon as the source has loaded. Never
    /// blocks on the fetch.
    fn play(&mut self) -> Result<()> {
        self.receive();
        if let Some(reason) = &self.failure {
            return Err(Error::Audio(reason.clone()));
        }
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
        self.paused = true;
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.incoming = None;
        self.paused = true;
    }

    fn poll(&mut self) -> Vec<VoiceEvent> {
        self.receive();
        let mut events = std::mem::take(&mut self.pending);
        if let Some(sink) = self.sink.as_ref() {
            if !self.paused && !self.ended {
                if sink.empty() {
                    self.ended = true;
                    events.push(VoiceEvent::Ended);
                } else {
                    events.push(VoiceEvent::Progress {
                        elapsed: sink.get_pos(),
                    });
                }
            }
        }
        events
    }
}

impl Drop for RodioVoice {
    fn drop(&mut self) {
        self.stop();
    }
}
