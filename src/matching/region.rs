//! Region classification over the static administrative hierarchy.

use std::collections::HashSet;

use crate::models::{NATIONWIDE, REGION_HIERARCHY};

/// Map a free-text organization/residence description onto provinces.
///
/// Two passes in strict hierarchy order: province aliases first, then
/// district substrings. The first hit wins — declaration order is the
/// deliberate tie-break for district names that collide across provinces.
/// Text matching nothing (including empty text) classifies as nationwide:
/// it imposes no regional restriction this hierarchy can recognize.
pub fn classify_regions(entry: &str) -> HashSet<&'static str> {
    let mut regions = HashSet::new();
    regions.insert(match_province(entry).unwrap_or(NATIONWIDE));
    regions
}

fn match_province(entry: &str) -> Option<&'static str> {
    for province in REGION_HIERARCHY {
        if province.aliases.iter().any(|alias| entry.contains(alias)) {
            return Some(province.canonical);
        }
    }
    for province in REGION_HIERARCHY {
        if province
            .districts
            .iter()
            .any(|district| entry.contains(district))
        {
            return Some(province.canonical);
        }
    }
    None
}

/// Resolve a user-supplied province name or alias to its canonical name.
/// Exact match only — user input is a selection, not free text.
pub fn resolve_province(name: &str) -> Option<&'static str> {
    let name = name.trim();
    REGION_HIERARCHY
        .iter()
        .find(|province| province.aliases.contains(&name))
        .map(|province| province.canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(entry: &str) -> &'static str {
        let regions = classify_regions(entry);
        assert_eq!(regions.len(), 1);
        regions.into_iter().next().unwrap()
    }

    #[test]
    fn alias_match_wins() {
        assert_eq!(single("서울특별시 강남구청"), "서울");
        assert_eq!(single("충청북도 일자리경제과"), "충북");
    }

    #[test]
    fn district_match_when_no_alias_present() {
        assert_eq!(single("강남구 거주 청년"), "서울");
        assert_eq!(single("수영구청 복지정책과"), "부산");
    }

    #[test]
    fn alias_substring_outranks_district_match() {
        // "해운대구청" embeds the 대구 alias, and the alias pass runs
        // before the district pass ever sees 해운대.
        assert_eq!(single("해운대구청 복지정책과"), "대구");
    }

    #[test]
    fn colliding_district_goes_to_first_declared_province() {
        // 중구 exists in 서울, 부산, 대구, 대전, 울산 — 서울 is declared first.
        assert_eq!(single("중구 주민"), "서울");
    }

    #[test]
    fn unrecognized_text_is_nationwide() {
        assert_eq!(single("국토교통부"), NATIONWIDE);
        assert_eq!(single(""), NATIONWIDE);
    }

    #[test]
    fn resolve_canonical_and_long_form_aliases() {
        assert_eq!(resolve_province("경기"), Some("경기"));
        assert_eq!(resolve_province("전라남도"), Some("전남"));
        assert_eq!(resolve_province(" 서울 "), Some("서울"));
        assert_eq!(resolve_province("도쿄"), None);
    }
}
