//! Non-interactive output: one JSON object per frame

use crate::config::{self, Mode, Settings, STRUCTURE_SEED_COUNT};
use crate::error::Result;
use crate::playback::{PlaybackError, Session};
use std::io::Write;

/// Play the run `settings` describes to the end, writing every frame to
/// `out` as a JSON line. Returns the number of frames written.
pub fn dump_run<W: Write>(settings: &Settings, mut out: W) -> Result<usize> {
    let mut session = Session::new(settings.history_limit);

    match settings.mode {
        Mode::Sort => session.start_sort(settings.algorithm, &settings.data)?,
        Mode::Structure => {
            let mut structure = settings.structure.create();
            let mut rng = settings.rng();
            structure.seed(&config::random_values(&mut rng, STRUCTURE_SEED_COUNT));
            session.start_demo(structure.as_mut())?;
        }
    }

    let mut written = 0;
    if let Some(frame) = session.current() {
        serde_json::to_writer(&mut out, frame)?;
        writeln!(out)?;
        written += 1;
    }

    loop {
        match session.step_forward() {
            Ok(frame) => {
                serde_json::to_writer(&mut out, frame)?;
                writeln!(out)?;
                written += 1;
            }
            Err(PlaybackError::AtEnd) => break,
            Err(e) => return Err(e.into()),
        }
    }

    out.flush()?;
    tracing::info!(frames = written, "dump complete");
    Ok(written)
}
