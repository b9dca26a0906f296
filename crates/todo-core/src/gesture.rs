//! Drag Gesture
//!
//! Turns a press / hold / move / release sequence over the active task rows
//! into a single `(from, to)` index pair. Knows nothing about the DOM: the
//! caller reports which row index lies under the pointer and fires
//! [`DragGesture::arm_elapsed`] once the hold delay has passed.

use crate::config::NEIGHBOR_SHIFT_PX;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Resolves a viewport point to the rows painted there
pub trait HitTest {
    /// Row indices under `point`, topmost first
    fn indices_at(&self, point: Point) -> Vec<usize>;

    fn index_at(&self, point: Point) -> Option<usize> {
        self.indices_at(point).first().copied()
    }
}

/// Vertical extent of one row, `top` inclusive, `bottom` exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowExtent {
    pub top: f64,
    pub bottom: f64,
}

/// Rows stacked along the y axis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowLayout {
    rows: Vec<RowExtent>,
}

impl RowLayout {
    pub fn new(rows: Vec<RowExtent>) -> Self {
        Self { rows }
    }

    /// `count` rows of equal height separated by `gap`, starting at `top`
    pub fn uniform(top: f64, height: f64, gap: f64, count: usize) -> Self {
        let rows = (0..count)
            .map(|i| {
                let row_top = top + i as f64 * (height + gap);
                RowExtent { top: row_top, bottom: row_top + height }
            })
            .collect();
        Self { rows }
    }
}

impl RowExtent {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }
}

impl HitTest for RowLayout {
    fn indices_at(&self, point: Point) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.contains(point.y))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Identifies one press, so a hold timer from an earlier press cannot arm a later one
pub type PressTicket = u64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    /// Pressed, waiting for the hold delay
    Armed { ticket: PressTicket, source: usize, origin: Point },
    Dragging { source: usize, origin: Point, hover: Option<usize> },
}

/// Direction the hovered neighbor is nudged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Up,
    Down,
}

impl Shift {
    pub fn offset_px(&self) -> f64 {
        match self {
            Shift::Up => -NEIGHBOR_SHIFT_PX,
            Shift::Down => NEIGHBOR_SHIFT_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborShift {
    pub index: usize,
    pub shift: Shift,
}

/// Transient visual state while dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFeedback {
    pub source: usize,
    /// Vertical distance of the pointer from where the press started
    pub offset_y: f64,
    pub neighbor: Option<NeighborShift>,
}

/// Committed result of a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderIntent {
    pub from: usize,
    pub to: usize,
}

/// Per-gesture state machine: `Idle -> Armed -> Dragging -> Idle`
#[derive(Debug, Clone)]
pub struct DragGesture {
    state: GestureState,
    active_len: usize,
    next_ticket: PressTicket,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGesture {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            active_len: 0,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Row under `point`, looking through the dragged row
    ///
    /// The dragged row follows the pointer and is painted on top, so the
    /// topmost hit is usually the row itself.
    pub fn target_at<H: HitTest + ?Sized>(&self, hits: &H, point: Point) -> Option<usize> {
        let source = match self.state {
            GestureState::Dragging { source, .. } | GestureState::Armed { source, .. } => Some(source),
            GestureState::Idle => None,
        };
        hits.indices_at(point).into_iter().find(|&index| Some(index) != source)
    }

    /// [`pointer_move`](Self::pointer_move) resolving the hovered row with `hits`
    pub fn pointer_move_over<H: HitTest + ?Sized>(&mut self, point: Point, hits: &H) -> Option<DragFeedback> {
        let hit = self.target_at(hits, point);
        self.pointer_move(point, hit)
    }

    /// [`release`](Self::release) resolving the drop row with `hits`
    pub fn release_over<H: HitTest + ?Sized>(&mut self, point: Point, hits: &H) -> Option<ReorderIntent> {
        let hit = self.target_at(hits, point);
        self.release(hit)
    }

    /// Press on row `index` of `active_len` rows
    ///
    /// Completed rows and out-of-range indices are not armed. Returns the
    /// ticket to hand back to [`arm_elapsed`](Self::arm_elapsed).
    pub fn press(&mut self, index: usize, completed: bool, origin: Point, active_len: usize) -> Option<PressTicket> {
        if completed || index >= active_len {
            return None;
        }
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.active_len = active_len;
        self.state = GestureState::Armed { ticket, source: index, origin };
        Some(ticket)
    }

    /// Hold delay elapsed with the pointer still down
    pub fn arm_elapsed(&mut self, ticket: PressTicket) -> bool {
        match self.state {
            GestureState::Armed { ticket: current, source, origin } if current == ticket => {
                self.state = GestureState::Dragging { source, origin, hover: None };
                true
            }
            _ => false,
        }
    }

    /// Pointer moved to `point`, over row `hit`
    ///
    /// The hovered neighbor only changes when another in-range row is hit;
    /// gaps between rows and the dragged row itself keep the previous one.
    pub fn pointer_move(&mut self, point: Point, hit: Option<usize>) -> Option<DragFeedback> {
        let active_len = self.active_len;
        let (source, origin, hover) = match &mut self.state {
            GestureState::Dragging { source, origin, hover } => (*source, *origin, hover),
            _ => return None,
        };
        if let Some(index) = hit.filter(|&i| i != source && i < active_len) {
            *hover = Some(index);
        }
        let neighbor = hover.map(|index| NeighborShift {
            index,
            shift: if index > source { Shift::Up } else { Shift::Down },
        });
        Some(DragFeedback {
            source,
            offset_y: point.y - origin.y,
            neighbor,
        })
    }

    /// Pointer released over row `hit`; always returns to idle
    pub fn release(&mut self, hit: Option<usize>) -> Option<ReorderIntent> {
        let state = std::mem::replace(&mut self.state, GestureState::Idle);
        match (state, hit) {
            (GestureState::Dragging { source, .. }, Some(to)) if to != source && to < self.active_len => {
                Some(ReorderIntent { from: source, to })
            }
            _ => None,
        }
    }

    /// Gesture interrupted; nothing is committed
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> RowLayout {
        // rows at [0,50), [60,110), [120,170)
        RowLayout::uniform(0.0, 50.0, 10.0, 3)
    }

    fn drag_from(gesture: &mut DragGesture, index: usize, y: f64) {
        let ticket = gesture.press(index, false, Point::new(10.0, y), 3).unwrap();
        assert!(gesture.arm_elapsed(ticket));
    }

    #[test]
    fn test_row_layout_hits() {
        let rows = layout();
        assert_eq!(rows.index_at(Point::new(0.0, 0.0)), Some(0));
        assert_eq!(rows.index_at(Point::new(0.0, 55.0)), None);
        assert_eq!(rows.index_at(Point::new(0.0, 60.0)), Some(1));
        assert_eq!(rows.index_at(Point::new(0.0, 169.9)), Some(2));
        assert_eq!(rows.index_at(Point::new(0.0, 170.0)), None);
    }

    #[test]
    fn test_drag_last_row_to_top() {
        let rows = layout();
        let mut gesture = DragGesture::new();
        drag_from(&mut gesture, 2, 140.0);

        let end = Point::new(10.0, 20.0);
        let feedback = gesture.pointer_move(end, rows.index_at(end)).unwrap();
        assert_eq!(feedback.offset_y, -120.0);
        assert_eq!(feedback.neighbor, Some(NeighborShift { index: 0, shift: Shift::Down }));

        assert_eq!(gesture.release(rows.index_at(end)), Some(ReorderIntent { from: 2, to: 0 }));
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    /// Static rows plus the dragged row painted on top at its translated position
    struct PaintedRows {
        rows: Vec<RowExtent>,
        lifted: Option<(usize, RowExtent)>,
    }

    impl PaintedRows {
        fn follow(&mut self, feedback: &DragFeedback) {
            let home = self.rows[feedback.source];
            self.lifted = Some((
                feedback.source,
                RowExtent { top: home.top + feedback.offset_y, bottom: home.bottom + feedback.offset_y },
            ));
        }
    }

    impl HitTest for PaintedRows {
        fn indices_at(&self, point: Point) -> Vec<usize> {
            let lifted = self.lifted.map(|(index, _)| index);
            let mut hits: Vec<usize> = self
                .lifted
                .filter(|(_, extent)| extent.contains(point.y))
                .map(|(index, _)| index)
                .into_iter()
                .collect();
            hits.extend(
                self.rows
                    .iter()
                    .enumerate()
                    .filter(|(index, row)| Some(*index) != lifted && row.contains(point.y))
                    .map(|(index, _)| index),
            );
            hits
        }
    }

    #[test]
    fn test_drag_sees_through_lifted_row() {
        let mut painted = PaintedRows { rows: layout().rows, lifted: None };
        let mut gesture = DragGesture::new();
        drag_from(&mut gesture, 2, 140.0);

        let mut last = None;
        for y in [120.0, 90.0, 60.0, 40.0, 20.0] {
            let point = Point::new(10.0, y);
            painted.follow(&DragFeedback { source: 2, offset_y: y - 140.0, neighbor: None });
            // the lifted row is always the topmost hit under the finger
            assert_eq!(painted.index_at(point), Some(2));
            last = gesture.pointer_move_over(point, &painted);
        }
        assert_eq!(last.and_then(|f| f.neighbor), Some(NeighborShift { index: 0, shift: Shift::Down }));

        let end = Point::new(10.0, 20.0);
        assert_eq!(gesture.target_at(&painted, end), Some(0));
        assert_eq!(gesture.release_over(end, &painted), Some(ReorderIntent { from: 2, to: 0 }));
    }

    #[test]
    fn test_lifted_row_alone_keeps_previous_neighbor() {
        let mut painted = PaintedRows { rows: layout().rows, lifted: None };
        let mut gesture = DragGesture::new();
        drag_from(&mut gesture, 0, 20.0);

        let over_next = gesture.pointer_move_over(Point::new(10.0, 80.0), &painted).unwrap();
        assert_eq!(over_next.neighbor.map(|n| n.index), Some(1));
        painted.follow(&over_next);

        // back over the row's own home, which is now empty
        let home = gesture.pointer_move_over(Point::new(10.0, 20.0), &painted).unwrap();
        assert_eq!(home.neighbor.map(|n| n.index), Some(1));
    }

    #[test]
    fn test_neighbor_below_shifts_up() {
        let mut gesture = DragGesture::new();
        drag_from(&mut gesture, 0, 20.0);
        let feedback = gesture.pointer_move(Point::new(10.0, 80.0), Some(1)).unwrap();
        assert_eq!(feedback.neighbor.unwrap().shift, Shift::Up);
        assert_eq!(feedback.neighbor.unwrap().shift.offset_px(), -NEIGHBOR_SHIFT_PX);
    }

    #[test]
    fn test_hover_survives_gaps_and_self() {
        let mut gesture = DragGesture::new();
        drag_from(&mut gesture, 0, 20.0);
        gesture.pointer_move(Point::new(10.0, 80.0), Some(1));
        let in_gap = gesture.pointer_move(Point::new(10.0, 55.0), None).unwrap();
        assert_eq!(in_gap.neighbor.map(|n| n.index), Some(1));
        let over_self = gesture.pointer_move(Point::new(10.0, 30.0), Some(0)).unwrap();
        assert_eq!(over_self.neighbor.map(|n| n.index), Some(1));
    }

    #[test]
    fn test_completed_rows_are_not_armed() {
        let mut gesture = DragGesture::new();
        assert_eq!(gesture.press(0, true, Point::default(), 3), None);
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn test_out_of_range_press_rejected() {
        let mut gesture = DragGesture::new();
        assert_eq!(gesture.press(3, false, Point::default(), 3), None);
    }

    #[test]
    fn test_tap_does_not_commit() {
        let mut gesture = DragGesture::new();
        gesture.press(1, false, Point::default(), 3).unwrap();
        assert!(gesture.pointer_move(Point::new(0.0, 10.0), Some(2)).is_none());
        assert_eq!(gesture.release(Some(2)), None);
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn test_release_on_self_or_nothing_is_noop() {
        let mut gesture = DragGesture::new();
        drag_from(&mut gesture, 1, 80.0);
        assert_eq!(gesture.release(Some(1)), None);

        drag_from(&mut gesture, 1, 80.0);
        assert_eq!(gesture.release(None), None);
    }

    #[test]
    fn test_release_out_of_range_rejected() {
        let mut gesture = DragGesture::new();
        drag_from(&mut gesture, 1, 80.0);
        assert_eq!(gesture.release(Some(7)), None);
    }

    #[test]
    fn test_cancel_discards_drag() {
        let mut gesture = DragGesture::new();
        drag_from(&mut gesture, 0, 20.0);
        gesture.pointer_move(Point::new(10.0, 140.0), Some(2));
        gesture.cancel();
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.release(Some(2)), None);
    }

    #[test]
    fn test_stale_timer_does_not_arm_new_press() {
        let mut gesture = DragGesture::new();
        let first = gesture.press(0, false, Point::default(), 3).unwrap();
        gesture.release(None);
        let second = gesture.press(1, false, Point::default(), 3).unwrap();
        assert!(!gesture.arm_elapsed(first));
        assert!(gesture.arm_elapsed(second));
    }
}
