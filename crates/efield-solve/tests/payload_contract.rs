use efield_core::{Bounds, Charge, Point};
use efield_solve::{
    evaluate_grid, evaluate_point, from_json_slice, to_canonical_json_string, GridRequest,
    PointRequest,
};

fn single_charge() -> Vec<Charge> {
    vec![Charge {
        q: 1e-9,
        x: 0.0,
        y: 0.0,
    }]
}

#[test]
fn grid_request_defaults_match_the_upstream_contract() {
    let request: GridRequest =
        from_json_slice(br#"{"charges": [{"q": 1e-9, "x": 0.0, "y": 0.0}]}"#).expect("request");
    assert_eq!(request.bounds, Bounds::default());
    assert_eq!(request.bounds.xmin, -2.0);
    assert_eq!(request.resolution, 50);
    assert_eq!(request.softening, 1e-3);
}

#[test]
fn point_request_defaults_to_fine_softening() {
    let request: PointRequest = from_json_slice(
        br#"{"charges": [{"q": 1e-9, "x": 0.0, "y": 0.0}], "point": {"x": 1.0, "y": 0.5}}"#,
    )
    .expect("request");
    assert_eq!(request.softening, 1e-6);
}

#[test]
fn grid_response_uses_the_fixed_wire_names() {
    let request = GridRequest {
        charges: single_charge(),
        bounds: Bounds::default(),
        resolution: 2,
        softening: 1e-3,
    };
    let response = evaluate_grid(&request).expect("grid response");
    let value = serde_json::to_value(&response).expect("json value");
    let object = value.as_object().expect("object");
    for key in ["X", "Y", "Ex", "Ey", "V", "charges"] {
        assert!(object.contains_key(key), "missing wire field {key}");
    }
    assert_eq!(object.len(), 6);
    assert_eq!(response.ex.len(), 2);
    assert_eq!(response.ex[0].len(), 2);
    assert_eq!(response.charges, request.charges);
}

#[test]
fn point_response_uses_the_fixed_wire_names() {
    let request = PointRequest {
        charges: single_charge(),
        point: Point { x: 1.0, y: 0.5 },
        softening: 1e-6,
    };
    let response = evaluate_point(&request).expect("point response");
    let json = to_canonical_json_string(&response).expect("canonical json");
    // Canonical encoding sorts keys, so the field vector leads.
    assert!(json.starts_with(r#"{"E":"#), "unexpected layout: {json}");
    for key in [r#""E_magnitude":"#, r#""V":"#, r#""point":"#] {
        assert!(json.contains(key), "missing wire field {key}");
    }
}

#[test]
fn empty_charge_lists_are_rejected_at_the_boundary() {
    let request = GridRequest {
        charges: Vec::new(),
        bounds: Bounds::default(),
        resolution: 10,
        softening: 1e-3,
    };
    let err = evaluate_grid(&request).unwrap_err();
    assert_eq!(err.info().code, "empty-charges");

    let err = evaluate_point(&PointRequest {
        charges: Vec::new(),
        point: Point { x: 0.0, y: 0.0 },
        softening: 1e-6,
    })
    .unwrap_err();
    assert_eq!(err.info().code, "empty-charges");
}

#[test]
fn malformed_requests_are_rejected_up_front() {
    let degenerate = evaluate_grid(&GridRequest {
        charges: single_charge(),
        bounds: Bounds {
            xmin: 1.0,
            xmax: 1.0,
            ymin: -1.0,
            ymax: 1.0,
        },
        resolution: 10,
        softening: 1e-3,
    })
    .unwrap_err();
    assert_eq!(degenerate.info().code, "degenerate-bounds");

    let undersized = evaluate_grid(&GridRequest {
        charges: single_charge(),
        bounds: Bounds::default(),
        resolution: 1,
        softening: 1e-3,
    })
    .unwrap_err();
    assert_eq!(undersized.info().code, "invalid-resolution");

    let negative = evaluate_point(&PointRequest {
        charges: single_charge(),
        point: Point { x: 0.0, y: 0.0 },
        softening: -1e-6,
    })
    .unwrap_err();
    assert_eq!(negative.info().code, "invalid-softening");

    let non_finite = evaluate_point(&PointRequest {
        charges: vec![Charge {
            q: f64::INFINITY,
            x: 0.0,
            y: 0.0,
        }],
        point: Point { x: 0.0, y: 0.0 },
        softening: 1e-6,
    })
    .unwrap_err();
    assert_eq!(non_finite.info().code, "non-finite-charge");
}
