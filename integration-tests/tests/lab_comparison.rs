use integration_tests::{load_parameters, load_records, nearest_by_axial_strain};
use norsand_solvers::triaxial::Triaxial;

#[test]
fn lab_records_load_in_the_shared_shape() {
    let records = load_records("lab_records.json").expect("loads");

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].stress_ratio(), Some(0.0));
    assert!(records.windows(2).all(|pair| pair[0].eps1 < pair[1].eps1));
}

#[test]
fn simulated_path_pairs_with_each_measured_point() {
    let params = load_parameters("dense_drained.toml").expect("loads");
    let records = load_records("lab_records.json").expect("loads");
    let history = Triaxial::new(params)
        .expect("valid parameters")
        .run()
        .expect("physical run")
        .history;

    let d_eps = params.strain_increment();
    for measured in &records {
        let simulated = nearest_by_axial_strain(&history, measured.eps1).expect("non-empty");

        assert!((simulated.eps1 - measured.eps1).abs() <= d_eps);
        assert!(simulated.p > 0.0);
        assert!(simulated.stress_ratio().is_some());
    }
}
