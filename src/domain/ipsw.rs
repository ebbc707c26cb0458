use crate::domain::identifier_deserializer::non_empty;
use bytesize::ByteSize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One signed firmware image for a device, version and build.
///
/// `signed` reflects the catalog at query time. Apple stops signing old builds, so a
/// `true` value may flip on a later request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ipsw {
    #[serde(deserialize_with = "non_empty")]
    pub identifier: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(rename = "buildid", deserialize_with = "non_empty")]
    pub build_id: String,
    #[serde(rename = "sha1sum", default, skip_serializing_if = "String::is_empty")]
    pub sha1: String,
    #[serde(rename = "md5sum", default, skip_serializing_if = "String::is_empty")]
    pub md5: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub filesize: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(rename = "releasedate", default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(rename = "uploaddate", default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub signed: bool,
}

impl Ipsw {
    /// File size in binary (1024-based) units.
    pub fn display_size(&self) -> String {
        ByteSize(self.filesize).to_string_as(true)
    }
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserializes_a_full_catalog_record() {
        let ipsw = serde_json::from_str::<Ipsw>(include_str!("../../tests/resources/ipsw_iphone15_2_20A362.json")).unwrap();

        assert_eq!(
            ipsw,
            Ipsw {
                identifier: "iPhone15,2".to_string(),
                version: "16.0".to_string(),
                build_id: "20A362".to_string(),
                sha1: "4ce23a7b5ca4ab2b4bde8cfd010b9bd1d7ab5e1c".to_string(),
                md5: "2d1e4a4c8ff6c5bb4dc48d41b3c7a6d4".to_string(),
                filesize: 6_338_573_766,
                url: "https://updates.cdn-apple.com/2022FallFCS/fullrestores/012-57185/iPhone15,2_16.0_20A362_Restore.ipsw"
                    .to_string(),
                release_date: Some(Utc.with_ymd_and_hms(2022, 9, 12, 17, 0, 0).unwrap()),
                upload_date: Some(Utc.with_ymd_and_hms(2022, 9, 7, 19, 38, 21).unwrap()),
                signed: false,
            }
        );
    }

    #[test]
    fn missing_and_null_optional_fields_decode_to_empty_values() {
        let ipsw = serde_json::from_value::<Ipsw>(json!({
            "identifier": "iPhone15,2",
            "buildid": "20B82",
            "releasedate": null,
        }))
        .unwrap();

        assert_eq!(ipsw.version, "");
        assert_eq!(ipsw.sha1, "");
        assert_eq!(ipsw.filesize, 0);
        assert_eq!(ipsw.release_date, None);
        assert_eq!(ipsw.upload_date, None);
        assert!(!ipsw.signed);
    }

    #[test]
    fn a_record_without_a_build_id_is_rejected() {
        let result = serde_json::from_value::<Ipsw>(json!({ "identifier": "iPhone15,2", "version": "16.1" }));

        assert!(result.is_err());
    }

    #[test]
    fn encoding_uses_wire_names_and_omits_empty_fields() {
        let ipsw = Ipsw {
            identifier: "iPhone15,2".to_string(),
            version: "16.1".to_string(),
            build_id: "20B82".to_string(),
            sha1: String::new(),
            md5: String::new(),
            filesize: 0,
            url: String::new(),
            release_date: Some(Utc.with_ymd_and_hms(2022, 10, 24, 17, 0, 0).unwrap()),
            upload_date: None,
            signed: true,
        };

        let encoded = serde_json::to_value(&ipsw).unwrap();

        assert_eq!(
            encoded,
            json!({
                "identifier": "iPhone15,2",
                "version": "16.1",
                "buildid": "20B82",
                "releasedate": "2022-10-24T17:00:00Z",
                "signed": true,
            })
        );
        assert_eq!(serde_json::from_value::<Ipsw>(encoded).unwrap(), ipsw);
    }

    #[rstest]
    #[case(0, "0 B")]
    #[case(1023, "1023 B")]
    #[case(1024, "1.0 KiB")]
    #[case(1536, "1.5 KiB")]
    #[case(5_242_880, "5.0 MiB")]
    #[case(6_338_573_766, "5.9 GiB")]
    #[case(6_409_476_680, "6.0 GiB")]
    fn display_size_uses_binary_units(#[case] filesize: u64, #[case] expected: &str) {
        let ipsw = serde_json::from_value::<Ipsw>(json!({
            "identifier": "iPhone15,2",
            "buildid": "20A362",
            "filesize": filesize,
        }))
        .unwrap();

        assert_eq!(ipsw.display_size(), expected);
    }
}
