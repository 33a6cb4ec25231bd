use envault::ui::components::scrollbar_helper::ScrollbarHelper;
use ratatui::layout::Rect;

#[test]
fn test_scrollbar_detection() {
    // 10 items in a bordered rect of height 7 leaves 5 content rows
    let rect = Rect::new(0, 0, 50, 7);

    let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 10);

    let scrollbar_rect = scrollbar_area.expect("Scrollbar should be needed for 10 items in 5 rows");
    assert_eq!(scrollbar_rect.width, 1, "Scrollbar should be 1 column wide");
    assert_eq!(scrollbar_rect.height, 5, "Scrollbar should sit between the borders");
    assert_eq!(scrollbar_rect.x, 49);
    assert_eq!(scrollbar_rect.y, 1);

    // List area should be reduced by 1 column for scrollbar
    assert_eq!(list_area.width, 49, "List area should be reduced for scrollbar");
}

#[test]
fn test_no_scrollbar_needed() {
    let rect = Rect::new(0, 0, 50, 7);

    let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 3);

    assert!(scrollbar_area.is_none(), "3 items fit in 5 rows");
    assert_eq!(list_area, rect, "List area should be full rect when no scrollbar");
}

#[test]
fn test_border_edge_case() {
    // Height 10 has 8 content rows inside the borders
    let rect = Rect::new(0, 0, 50, 10);

    assert!(ScrollbarHelper::calculate_areas(rect, 8).1.is_none());
    assert!(ScrollbarHelper::calculate_areas(rect, 9).1.is_some());
}

#[test]
fn test_visible_offset_follows_cursor() {
    // Cursor inside the window keeps the offset
    assert_eq!(ScrollbarHelper::visible_offset(2, 4, 5), 2);
    // Cursor below the window scrolls down just enough
    assert_eq!(ScrollbarHelper::visible_offset(0, 7, 5), 3);
    // Cursor above the window scrolls up to it
    assert_eq!(ScrollbarHelper::visible_offset(6, 1, 5), 1);
    // Zero height never scrolls
    assert_eq!(ScrollbarHelper::visible_offset(3, 9, 0), 0);
}
