use super::*;

#[test]
fn total_count_label_includes_leading_space() {
    assert_eq!(total_count_label(5), " (5 total)");
    assert_eq!(total_count_label(0), " (0 total)");
}
