use crate::galaxy::params_for_density;

#[test]
fn default_density() {
    let params = params_for_density(5);

    assert_eq!(params.min_step_length, 2.0);
    assert_eq!(params.max_step_length, 3.5);
    assert_eq!(params.min_distance, 2.3);
    assert_eq!(params.graph_distance, 32);
    assert_eq!(params.graph_max_stars, 512);
}

#[test]
fn out_of_range_density_falls_back() {
    assert_eq!(params_for_density(0), params_for_density(5));
    assert_eq!(params_for_density(42), params_for_density(5));
}

#[test]
fn sparser_levels_spread_out() {
    for level in 1..9 {
        let a = params_for_density(level);
        let b = params_for_density(level + 1);
        assert!(b.max_step_length > a.max_step_length);
        assert!(b.min_distance >= a.min_distance);
    }
}
