//! End-to-end editing scenarios against the shared model

use patrol_designer_common::{
    project, ExportDocument, ExportOptions, LatLng, PickTarget, PickerSession, PlanStore,
    PointEdit, Position, PositionEdit,
};

fn export(store: &PlanStore) -> String {
    project(store.positions(), &ExportOptions::basic())
        .to_json_compact()
        .expect("serialize failed")
}

#[test]
fn test_camera_point_scenario() {
    let mut store = PlanStore::new();
    store.add_point(0);
    store.update_point_field(0, 0, PointEdit::Name("Camera-01".to_string()));
    store.update_point_field(0, 0, PointEdit::Latitude(Some(47.9184)));
    store.update_point_field(0, 0, PointEdit::Longitude(Some(106.9172)));

    assert_eq!(
        export(&store),
        r#"{"positions":[{"name":"","points":[{"name":"Camera-01","lat":47.9184,"lng":106.9172}]}]}"#
    );
}

#[test]
fn test_remove_out_of_range_keeps_length() {
    let mut store = PlanStore::new();
    store.add_position();
    let before = export(&store);

    store.remove_position(5);

    assert_eq!(store.len(), 2);
    assert_eq!(export(&store), before);
}

#[test]
fn test_reset_after_arbitrary_edits() {
    let mut store = PlanStore::new();
    store.add_position();
    store.add_point(1);
    store.update_point_field(1, 0, PointEdit::Latitude(Some(1.0)));
    store.update_position_field(0, PositionEdit::Description("gate".to_string()));
    store.remove_position(0);

    store.reset();

    assert_eq!(store.len(), 1);
    assert_eq!(store.position(0), Some(&Position::default()));
}

#[test]
fn test_picker_then_clear() {
    let mut store = PlanStore::new();
    let mut session = PickerSession::open(PickTarget::Position(0));
    session.apply(&mut store, LatLng::new(47.92, 106.92));
    session.close();

    assert_eq!(
        export(&store),
        r#"{"positions":[{"name":"","lat":47.92,"lng":106.92,"points":[]}]}"#
    );

    store.clear_position_coordinates(0);
    assert_eq!(export(&store), r#"{"positions":[{"name":"","points":[]}]}"#);
}

#[test]
fn test_numbers_survive_round_trip() {
    let mut store = PlanStore::new();
    store.update_position_field(0, PositionEdit::Latitude(Some(47.91841234567891)));
    store.update_position_field(0, PositionEdit::Longitude(Some(106.91727123456789)));

    let json = project(store.positions(), &ExportOptions::basic())
        .to_json_pretty()
        .unwrap();
    let document = ExportDocument::from_json(&json).unwrap();

    assert_eq!(document.positions[0].lat, Some(47.91841234567891));
    assert_eq!(document.positions[0].lng, Some(106.91727123456789));
}
