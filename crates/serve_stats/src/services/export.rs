use crate::error::Result;
use crate::models::RallyRecord;

pub const EXPORT_FILE_NAME: &str = "serve_log.csv";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const HEADER: [&str; 13] = [
    "date",
    "match",
    "set",
    "rally",
    "serving side",
    "server",
    "rotation",
    "result",
    "ace",
    "effect",
    "miss",
    "team score",
    "opponent score",
];

/// Renders the rally log as UTF-8 CSV prefixed with a byte-order mark.
///
/// The rotation column is the 1-based position in the serve order.
pub fn export_csv(records: &[RallyRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.to_vec());
    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.match_name.clone(),
            record.set_number.to_string(),
            record.rally_number.to_string(),
            record.serving_side.to_string(),
            record.server.to_string(),
            (u32::from(record.rotation_index) + 1).to_string(),
            record.result.to_string(),
            record.ace.to_string(),
            record.effect.to_string(),
            record.miss.to_string(),
            record.team_score.to_string(),
            record.opponent_score.to_string(),
        ])?;
    }

    Ok(writer.into_inner()?)
}
