//! SVG preview assembly.

use std::collections::BTreeMap;

use crate::artwork::decoder::SvgDecoder;
use crate::artwork::types::TraitSet;
use crate::observability::metrics;

/// Decoded SVG documents keyed by trait name.
///
/// Only traits whose payload decoded successfully appear; the key set is
/// always a subset of the non-empty trait names.
pub type PreviewMap = BTreeMap<String, String>;

/// Decode every non-empty trait payload.
///
/// Decoding is attempted per trait; a failure drops that trait from the map
/// and leaves the rest intact. The map is rebuilt from scratch on every
/// call — the trait set is small and recomputation keeps it trivially in
/// sync with its source.
pub async fn build_previews<D: SvgDecoder + ?Sized>(set: &TraitSet, decoder: &D) -> PreviewMap {
    let mut previews = PreviewMap::new();

    for (name, payload) in set.non_empty() {
        match decoder.decode(payload).await {
            Ok(svg) => {
                previews.insert(name.to_string(), svg);
            }
            Err(e) => {
                metrics::record_decode_failure(name);
                tracing::warn!(trait_name = %name, error = %e, "Skipping undecodable trait payload");
            }
        }
    }

    previews
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::decoder::ZlibSvgDecoder;
    use crate::artwork::types::{TraitEntry, TraitSet};
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn deflate_hex(svg: &str) -> String {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(svg.as_bytes()).unwrap();
        hex::encode(encoder.finish().unwrap())
    }

    fn entry(name: &str, data: Option<String>) -> TraitEntry {
        TraitEntry {
            name: name.to_string(),
            data,
        }
    }

    #[tokio::test]
    async fn test_previews_subset_of_non_empty() {
        let set = TraitSet::from_entries(vec![
            entry("background", Some(deflate_hex("<svg>bg</svg>"))),
            entry("eyes", None),
            entry("mouth", Some(String::new())),
        ]);

        let previews = build_previews(&set, &ZlibSvgDecoder).await;
        assert_eq!(previews.len(), 1);
        assert_eq!(previews["background"], "<svg>bg</svg>");
        assert!(!previews.contains_key("eyes"));
        assert!(!previews.contains_key("mouth"));
    }

    #[tokio::test]
    async fn test_one_bad_payload_does_not_poison_the_rest() {
        let set = TraitSet::from_entries(vec![
            entry("background", Some(deflate_hex("<svg>bg</svg>"))),
            entry("eyes", Some("not hex at all".to_string())),
            entry("badge", Some(deflate_hex("<svg>badge</svg>"))),
        ]);

        let previews = build_previews(&set, &ZlibSvgDecoder).await;
        assert_eq!(previews.len(), 2);
        assert!(previews.contains_key("background"));
        assert!(previews.contains_key("badge"));
        assert!(!previews.contains_key("eyes"));
    }
}
