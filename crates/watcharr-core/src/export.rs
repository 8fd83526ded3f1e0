//! Client-side export of the watched list.
//!
//! Each format renders the in-memory list to a document; [`data_url`] wraps
//! the document in a `data:` URL that a browser or shell can save directly.

use serde::Serialize;
use thiserror::Error;
use watcharr_models::{Activity, DownloadFormat, Watched};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML serialization failed: {0}")]
    Xml(String),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

const CSV_HEADERS: [&str; 11] = [
    "id",
    "contentId",
    "tmdbId",
    "type",
    "title",
    "status",
    "rating",
    "thoughts",
    "activityCount",
    "createdAt",
    "updatedAt",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    id: u64,
    content_id: u64,
    tmdb_id: u64,
    media_type: &'a str,
    title: &'a str,
    status: &'a str,
    rating: Option<u8>,
    thoughts: Option<&'a str>,
    activity_count: usize,
    created_at: String,
    updated_at: String,
}

#[derive(Serialize)]
#[serde(rename = "watchedList")]
struct XmlWatchedList<'a> {
    #[serde(rename = "watched")]
    entries: Vec<XmlWatched<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct XmlWatched<'a> {
    id: u64,
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thoughts: Option<&'a str>,
    content: XmlContent<'a>,
    activity: Vec<XmlActivity<'a>>,
    created_at: String,
    updated_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct XmlContent<'a> {
    id: u64,
    tmdb_id: u64,
    #[serde(rename = "type")]
    media_type: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    poster_path: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct XmlActivity<'a> {
    id: u64,
    #[serde(rename = "type")]
    activity_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a str>,
    created_at: String,
}

/// Render the list as a standalone document in `format`
pub fn render(format: DownloadFormat, entries: &[Watched]) -> Result<String, ExportError> {
    match format {
        DownloadFormat::Json => to_json(entries),
        DownloadFormat::Csv => to_csv(entries),
        DownloadFormat::Xml => to_xml(entries),
    }
}

/// Render the list and embed it as `data:<mime>;charset=utf-8,<escaped body>`
pub fn data_url(format: DownloadFormat, entries: &[Watched]) -> Result<String, ExportError> {
    let body = render(format, entries)?;
    Ok(format!(
        "data:{};charset=utf-8,{}",
        format.mime_type(),
        urlencoding::encode(&body)
    ))
}

fn to_json(entries: &[Watched]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

fn to_csv(entries: &[Watched]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    // Written by hand so an empty list still yields a header row
    writer.write_record(CSV_HEADERS)?;
    for entry in entries {
        writer.serialize(CsvRow {
            id: entry.id,
            content_id: entry.content.id,
            tmdb_id: entry.content.tmdb_id,
            media_type: entry.content.media_type.as_str(),
            title: &entry.content.title,
            status: entry.status.as_str(),
            rating: entry.rating,
            thoughts: entry.thoughts.as_deref(),
            activity_count: entry.activity.len(),
            created_at: entry.created_at.to_rfc3339(),
            updated_at: entry.updated_at.to_rfc3339(),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

fn to_xml(entries: &[Watched]) -> Result<String, ExportError> {
    let list = XmlWatchedList {
        entries: entries.iter().map(xml_entry).collect(),
    };
    quick_xml::se::to_string(&list).map_err(|e| ExportError::Xml(e.to_string()))
}

fn xml_entry(entry: &Watched) -> XmlWatched<'_> {
    XmlWatched {
        id: entry.id,
        status: entry.status.as_str(),
        rating: entry.rating,
        thoughts: entry.thoughts.as_deref(),
        content: XmlContent {
            id: entry.content.id,
            tmdb_id: entry.content.tmdb_id,
            media_type: entry.content.media_type.as_str(),
            title: &entry.content.title,
            poster_path: entry.content.poster_path.as_deref(),
        },
        activity: entry.activity.iter().map(xml_activity).collect(),
        created_at: entry.created_at.to_rfc3339(),
        updated_at: entry.updated_at.to_rfc3339(),
    }
}

fn xml_activity(activity: &Activity) -> XmlActivity<'_> {
    XmlActivity {
        id: activity.id,
        activity_type: &activity.activity_type,
        data: activity.data.as_deref(),
        created_at: activity.created_at.to_rfc3339(),
    }
}
