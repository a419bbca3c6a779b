//! JSON encoding and decoding glue
//!
//! Thin wrappers around `serde_json` that write into byte sinks, decode
//! response bodies, and package serialized values as request bodies.

use crate::error::{JsonHttpError, Result};
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Cursor, Read, Seek, SeekFrom, Write};

/// Serialize `data` as JSON into `writer`.
pub fn serialize_json_to_writer<W, T>(writer: &mut W, data: &T) -> Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    serde_json::to_writer(&mut *writer, data).map_err(JsonHttpError::Encode)?;
    writer.flush()?;
    Ok(())
}

/// Serialize `data` as JSON into `stream`, then rewind it to the start so the
/// caller can read the payload back.
pub fn serialize_json_to_stream<S, T>(stream: &mut S, data: &T) -> Result<()>
where
    S: Write + Seek + ?Sized,
    T: Serialize + ?Sized,
{
    serialize_json_to_writer(stream, data)?;
    stream.seek(SeekFrom::Start(0))?;
    Ok(())
}

pub fn serialize_json_to_string<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    serde_json::to_string(data).map_err(JsonHttpError::Encode)
}

/// Decode a JSON body. Empty or whitespace-only input yields `T::default()`.
pub fn deserialize_json_from_slice<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(JsonHttpError::Decode)
}

/// Read `reader` to the end and decode it with [`deserialize_json_from_slice`].
pub fn deserialize_json_from_reader<R, T>(reader: &mut R) -> Result<T>
where
    R: Read + ?Sized,
    T: DeserializeOwned + Default,
{
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    deserialize_json_from_slice(&buf)
}

/// Serialized request payload, optionally tagged with a content type.
#[derive(Debug, Clone)]
pub struct JsonBody {
    bytes: Bytes,
    content_type: Option<HeaderValue>,
}

impl JsonBody {
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn content_type(&self) -> Option<&HeaderValue> {
        self.content_type.as_ref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Attach the payload (and its content type, when tagged) to a request.
    pub fn apply(self, rb: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let rb = match &self.content_type {
            Some(ct) => rb.header(CONTENT_TYPE, ct.clone()),
            None => rb,
        };
        rb.body(self.bytes)
    }
}

impl From<JsonBody> for reqwest::Body {
    fn from(body: JsonBody) -> Self {
        reqwest::Body::from(body.bytes)
    }
}

/// Serialize `data` into `stream` and wrap the buffer as a request body
/// tagged `application/json`.
///
/// When `data` is `None`, `T::default()` is serialized and the body carries
/// no content type.
pub fn create_json_body<T>(mut stream: Cursor<Vec<u8>>, data: Option<&T>) -> Result<JsonBody>
where
    T: Serialize + Default,
{
    let content_type = match data {
        Some(data) => {
            serialize_json_to_stream(&mut stream, data)?;
            Some(HeaderValue::from_static(
                crate::defaults::http::JSON_CONTENT_TYPE,
            ))
        }
        None => {
            serialize_json_to_stream(&mut stream, &T::default())?;
            None
        }
    };

    Ok(JsonBody {
        bytes: Bytes::from(stream.into_inner()),
        content_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Station {
        id: i64,
        name: String,
        tags: Vec<String>,
        #[serde(with = "crate::dates::web_date")]
        installed: DateTime<Utc>,
    }

    fn station() -> Station {
        Station {
            id: 524901,
            name: "Moscow".into(),
            tags: vec!["ru".into()],
            installed: Utc.with_ymd_and_hms(2019, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn stream_is_rewound_after_write() {
        let mut stream = Cursor::new(Vec::new());
        serialize_json_to_stream(&mut stream, &station()).unwrap();
        assert_eq!(stream.position(), 0);

        let decoded: Station = deserialize_json_from_reader(&mut stream).unwrap();
        assert_eq!(decoded, station());
    }

    #[test]
    fn writes_web_dates_in_utc() {
        let json = serialize_json_to_string(&station()).unwrap();
        assert!(json.contains(r#""installed":"2019-06-01T12:00:00.000Z""#));
    }

    #[test]
    fn file_sink_round_trips() {
        let mut file = tempfile::tempfile().unwrap();
        let mut payload = BTreeMap::new();
        payload.insert("city".to_string(), serde_json::json!("Moscow"));
        payload.insert("cnt".to_string(), serde_json::json!(40));

        serialize_json_to_stream(&mut file, &payload).unwrap();
        let back: BTreeMap<String, serde_json::Value> =
            deserialize_json_from_reader(&mut file).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn empty_body_decodes_to_default() {
        let value: Station = deserialize_json_from_slice(b"").unwrap();
        assert_eq!(value, Station::default());
        let value: Option<i32> = deserialize_json_from_slice(b" \r\n").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = deserialize_json_from_slice::<Station>(b"{\"id\":").unwrap_err();
        assert!(matches!(err, JsonHttpError::Decode(_)));
    }

    #[test]
    fn json_body_is_tagged_when_data_present() {
        let body = create_json_body(Cursor::new(Vec::new()), Some(&station())).unwrap();
        assert_eq!(body.content_type().unwrap(), "application/json");
        let back: Station = serde_json::from_slice(body.bytes()).unwrap();
        assert_eq!(back, station());
    }

    // Absent data keeps the reference behavior: default payload, no content type.
    #[test]
    fn json_body_without_data_has_no_content_type() {
        let body = create_json_body::<Station>(Cursor::new(Vec::new()), None).unwrap();
        assert!(body.content_type().is_none());
        let back: Station = serde_json::from_slice(body.bytes()).unwrap();
        assert_eq!(back, Station::default());
    }

    #[test]
    fn apply_sets_header_and_body() {
        let body = create_json_body(Cursor::new(Vec::new()), Some(&vec![1, 2, 3])).unwrap();
        let request = body
            .apply(reqwest::Client::new().post("http://localhost/readings"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let sent = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(sent, b"[1,2,3]");
    }
}
