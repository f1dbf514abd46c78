// tests/merge.rs
//
// Buffer merge rules: column reconciliation, row identity, cell policy.
//
use grid_capture::buffer::Buffer;
use grid_capture::snapshot::{Snapshot, SnapshotColumn, SnapshotRow};

fn col(id: &str, index: i64, name: &str) -> SnapshotColumn {
    SnapshotColumn::new(id, index, name)
}

fn row(id: &str, cells: &[(&str, &str)]) -> SnapshotRow {
    SnapshotRow::new(id, cells.iter().copied())
}

fn name_age() -> Vec<SnapshotColumn> {
    vec![col("c1", 0, "Name"), col("c2", 1, "Age")]
}

#[test]
fn empty_snapshot_is_a_no_op() {
    let mut buf = Buffer::new();
    assert_eq!(buf.merge(&Snapshot::default()), 0);
    assert_eq!(buf, Buffer::new());
}

#[test]
fn re_merging_the_same_snapshot_adds_nothing() {
    let snap = Snapshot::new(
        name_age(),
        vec![row("r1", &[("c1", "Alice"), ("c2", "30")]), row("r2", &[("c1", "Bob")])],
    );

    let mut once = Buffer::new();
    assert_eq!(once.merge(&snap), 2);

    let mut twice = once.clone();
    assert_eq!(twice.merge(&snap), 0);
    assert_eq!(twice, once);
}

#[test]
fn column_index_only_moves_left() {
    let mut buf = Buffer::new();
    buf.merge(&Snapshot::new(vec![col("c", 5, "C")], vec![]));
    assert_eq!(buf.column("c").unwrap().index, 5);

    buf.merge(&Snapshot::new(vec![col("c", 2, "C")], vec![]));
    assert_eq!(buf.column("c").unwrap().index, 2);

    buf.merge(&Snapshot::new(vec![col("c", 5, "C")], vec![]));
    assert_eq!(buf.column("c").unwrap().index, 2);
}

#[test]
fn moving_left_does_not_fill_an_empty_name() {
    let mut buf = Buffer::new();
    buf.merge(&Snapshot::new(vec![col("c", 5, "")], vec![]));
    buf.merge(&Snapshot::new(vec![col("c", 2, "X")], vec![]));
    let c = buf.column("c").unwrap();
    assert_eq!((c.index, c.name.as_str()), (2, ""));

    // a later sighting that does not move left still fills it
    buf.merge(&Snapshot::new(vec![col("c", 2, "X")], vec![]));
    assert_eq!(buf.column("c").unwrap().name, "X");
}

#[test]
fn empty_column_name_is_filled_later_but_names_are_not_renamed() {
    let mut buf = Buffer::new();
    buf.merge(&Snapshot::new(vec![col("c", 3, "")], vec![]));
    buf.merge(&Snapshot::new(vec![col("c", 4, "Status")], vec![]));
    let c = buf.column("c").unwrap();
    assert_eq!((c.index, c.name.as_str()), (3, "Status"));

    buf.merge(&Snapshot::new(vec![col("c", 3, "Renamed")], vec![]));
    assert_eq!(buf.column("c").unwrap().name, "Status");
}

#[test]
fn last_non_empty_value_wins() {
    let cols = vec![col("A", 0, "A")];
    let mut buf = Buffer::new();
    buf.merge(&Snapshot::new(cols.clone(), vec![row("r1", &[("A", "x")])]));
    buf.merge(&Snapshot::new(cols.clone(), vec![row("r1", &[("A", "")])]));
    assert_eq!(buf.cell("r1", "A"), Some("x"));

    buf.merge(&Snapshot::new(cols, vec![row("r1", &[("A", "y")])]));
    assert_eq!(buf.cell("r1", "A"), Some("y"));
}

#[test]
fn blank_rows_and_rows_without_id_are_skipped() {
    let mut snap = Snapshot::new(
        name_age(),
        vec![
            row("blank", &[("c1", ""), ("c2", "")]),
            row("nocells", &[]),
            row("ok", &[("c1", "Ann"), ("c2", "")]),
        ],
    );
    snap.rows.push(SnapshotRow { id: None, cells: [(String::from("c1"), String::from("ghost"))].into() });
    snap.columns.push(SnapshotColumn { id: None, index: 9, name: String::from("ghost") });

    let mut buf = Buffer::new();
    assert_eq!(buf.merge(&snap), 1);
    assert!(buf.row("blank").is_none());
    assert!(buf.row("nocells").is_none());
    assert_eq!(buf.row_count(), 1);
    assert_eq!(buf.column_count(), 2);
    // empty values are never stored
    assert_eq!(buf.cell("ok", "c2"), None);
}

#[test]
fn order_is_assigned_once_and_next_order_stays_ahead() {
    let mut buf = Buffer::new();
    buf.merge(&Snapshot::new(name_age(), vec![row("r2", &[("c1", "b")]), row("r1", &[("c1", "a")])]));
    buf.merge(&Snapshot::new(name_age(), vec![row("r3", &[("c1", "c")]), row("r2", &[("c2", "9")])]));

    assert_eq!(buf.row("r2").unwrap().order, 0);
    assert_eq!(buf.row("r1").unwrap().order, 1);
    assert_eq!(buf.row("r3").unwrap().order, 2);
    assert_eq!(buf.next_order(), 3);
    assert!(buf.rows().all(|(_, r)| r.order < buf.next_order()));
}

#[test]
fn clear_resets_and_is_idempotent() {
    let mut buf = Buffer::new();
    buf.merge(&Snapshot::new(name_age(), vec![row("r1", &[("c1", "Alice")])]));
    buf.clear();
    assert_eq!(buf, Buffer::new());
    buf.clear();
    assert_eq!(buf, Buffer::new());
    assert_eq!(buf.next_order(), 0);
}
