use planetary::Body;
use stellar::StarCategory;

use crate::birth::BirthSelection;
use crate::star::Star;

fn stars() -> Vec<Star> {
    let mut star = Star::new(1, "Home", StarCategory::DEFAULT_HOME);
    let mut giant = Body::gas_giant("Home - II", 80);
    giant.moons.push(Body::telluric("Home - II - a", 200));
    star.planets.push(Body::telluric("Home - I", 200));
    star.planets.push(giant);
    vec![star]
}

#[test]
fn resolves_planet() {
    let stars = stars();
    let birth = BirthSelection::Planet { star: 0, index: 0 };

    assert_eq!(birth.resolve(&stars).unwrap().name, "Home - I");
    assert!(birth.host(&stars).is_none());
    assert!(!birth.is_moon());
}

#[test]
fn resolves_moon_and_host() {
    let stars = stars();
    let birth = BirthSelection::Moon {
        star: 0,
        planet: 1,
        index: 0,
    };

    assert_eq!(birth.resolve(&stars).unwrap().name, "Home - II - a");
    assert_eq!(birth.host(&stars).unwrap().name, "Home - II");
    assert_eq!(birth.planet(), 1);
}

#[test]
fn stale_selection_does_not_resolve() {
    let mut stars = stars();
    let birth = BirthSelection::Moon {
        star: 0,
        planet: 0,
        index: 3,
    };

    assert!(birth.resolve(&stars).is_none());
    assert!(birth.resolve_mut(&mut stars).is_none());
    assert!(
        BirthSelection::Planet { star: 4, index: 0 }
            .resolve(&stars)
            .is_none()
    );
}

#[test]
fn resolve_mut_edits_body() {
    let mut stars = stars();
    let birth = BirthSelection::Planet { star: 0, index: 0 };

    birth.resolve_mut(&mut stars).unwrap().radius = 300;
    assert_eq!(stars[0].planets[0].radius, 300);
}
