use std::path::PathBuf;

use structopt::StructOpt;
use utils::lnurl;
use utils::qr::{self, QrFormat, QR_SIZE};
use xerror::cli::CliError;

#[derive(Debug, StructOpt)]
pub enum Action {
    /// Resolve a lightning address and encode it as an LNURL.
    Convert {
        address: String,
        /// Prepend the `lightning:` scheme to the result.
        #[structopt(short = "p", long = "prefix")]
        prefix: bool,
        /// Also render a QR code: text, svg or png.
        #[structopt(long = "qr")]
        qr: Option<QrFormat>,
        /// Where to write svg/png QR codes.
        #[structopt(short = "o", long = "out", parse(from_os_str))]
        out: Option<PathBuf>,
        #[structopt(long = "json")]
        json: bool,
    },
    /// Print the LUD16 url of a lightning address.
    Resolve { address: String },
    /// Encode an arbitrary url as an LNURL.
    Encode {
        url: String,
        #[structopt(short = "p", long = "prefix")]
        prefix: bool,
    },
}

/// What an action produced: lines for stdout and, optionally, a file it wrote.
#[derive(Debug, Default)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub written: Option<PathBuf>,
}

impl Action {
    pub fn run(self, logger: &slog::Logger) -> Result<Outcome, CliError> {
        match self {
            Self::Convert {
                address,
                prefix,
                qr,
                out,
                json,
            } => {
                let conversion = lnurl::convert(&address, prefix)?;
                slog::debug!(logger, "Resolved lightning address"; "lud16_url" => conversion.lud16_url.as_str());

                let mut outcome = Outcome::default();
                if json {
                    let body =
                        serde_json::to_string_pretty(&conversion).map_err(|err| CliError::Serialize(err.to_string()))?;
                    outcome.lines.push(body);
                } else {
                    outcome.lines.push(format!("LUD16 URL: {}", conversion.lud16_url));
                    outcome.lines.push(format!("LNURL:     {}", conversion.value));
                }

                match qr {
                    Some(QrFormat::Text) => outcome.lines.push(qr::to_text(&conversion.value)?),
                    Some(format) => {
                        let path = out.unwrap_or_else(|| PathBuf::from(format.file_name()));
                        let bytes = qr::render(&conversion.value, format, QR_SIZE)?;
                        std::fs::write(&path, bytes).map_err(|err| CliError::Write {
                            path: path.display().to_string(),
                            reason: err.to_string(),
                        })?;
                        slog::info!(logger, "QR code saved"; "path" => %path.display(), "format" => %format);
                        outcome.written = Some(path);
                    }
                    None => {}
                }
                Ok(outcome)
            }
            Self::Resolve { address } => {
                let url = lnurl::resolve(&address).map_err(xerror::lnurl::LnurlError::from)?;
                Ok(Outcome {
                    lines: vec![url],
                    written: None,
                })
            }
            Self::Encode { url, prefix } => {
                let encoded = lnurl::encode_url(&url, prefix)?;
                Ok(Outcome {
                    lines: vec![encoded.value],
                    written: None,
                })
            }
        }
    }
}
