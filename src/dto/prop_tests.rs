use super::*;
use crate::test_utils::arb_item_ids;
use proptest::prelude::*;

proptest! {
    /// Joining any list of IDs with commas (and optional padding) parses back to the same list
    #[test]
    fn prop_item_ids_parses_joined_list(
        ids in arb_item_ids(),
        pad in prop::sample::select(vec!["", " ", "  "]),
    ) {
        prop_assume!(!ids.is_empty());
        let raw = ids
            .iter()
            .map(|id| format!("{}{}{}", pad, id, pad))
            .collect::<Vec<_>>()
            .join(",");
        let dto = PointSearchDto { items: Some(raw), ..Default::default() };
        prop_assert_eq!(dto.item_ids(), Ok(Some(ids)));
    }

    /// A segment with letters in it is always reported back as the error
    #[test]
    fn prop_item_ids_reports_bad_segment(
        ids in arb_item_ids(),
        bad in "[a-z]{1,8}",
    ) {
        let mut segments: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        segments.push(bad.clone());
        let dto = PointSearchDto { items: Some(segments.join(",")), ..Default::default() };
        prop_assert_eq!(dto.item_ids(), Err(bad));
    }
}
