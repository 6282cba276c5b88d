//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `postersession_core` linkage without a UI host.
//! - Optionally mirror one JSON area record through a controller and echo it.
//!
//! Set `POSTERSESSION_LOG_DIR` to an absolute path to enable file logging.

use postersession_core::{
    decode_area, encode_area, LoggingConfig, PosterAreaChange, PosterAreaEvent,
    PosterSessionAreaController,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "POSTERSESSION_LOG_DIR";

fn main() -> ExitCode {
    println!("postersession_core ping={}", postersession_core::ping());
    println!(
        "postersession_core version={}",
        postersession_core::core_version()
    );

    if let Ok(dir) = std::env::var(LOG_DIR_ENV) {
        let started = LoggingConfig::with_default_level(&dir)
            .and_then(|config| postersession_core::init_logging(&config));
        if let Err(err) = started {
            eprintln!("logging disabled: {err}");
        }
    }

    let Some(payload) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };
    match mirror(&payload) {
        Ok(echo) => {
            println!("{echo}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_mirror module=cli status=error");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Decodes `payload`, replays it onto a controller built from itself, and
/// re-encodes the exported snapshot. A silent replay proves change detection.
fn mirror(payload: &str) -> Result<String, postersession_core::WireError> {
    let area = decode_area(payload)?;
    let mut controller = PosterSessionAreaController::new(area.clone());
    for event in PosterAreaEvent::ALL {
        controller.add_listener(event, |change: &PosterAreaChange<'_>| {
            eprintln!("unexpected {} during replay", change.kind());
        });
    }
    let fired = controller.update_from(&area);
    log::info!(
        "event=cli_mirror module=cli status=ok changed={}",
        fired.len()
    );
    encode_area(&controller.to_snapshot())
}
