use std::collections::HashSet;

use crate::naming::{companion_name, moon_letter, moon_name, planet_name, roman, star_name};

#[test]
fn roman_numerals() {
    let expected = [
        (1, "I"),
        (2, "II"),
        (4, "IV"),
        (9, "IX"),
        (14, "XIV"),
        (40, "XL"),
        (1994, "MCMXCIV"),
    ];
    for (n, numeral) in expected {
        assert_eq!(roman(n), numeral);
    }
    assert_eq!(roman(0), "");
}

#[test]
fn moon_letters() {
    assert_eq!(moon_letter(0), "a");
    assert_eq!(moon_letter(9), "j");
    assert_eq!(moon_letter(25), "z");
    assert_eq!(moon_letter(26), "aa");
}

#[test]
fn body_names() {
    assert_eq!(planet_name("Sol", 0), "Sol - I");
    assert_eq!(planet_name("Sol", 3), "Sol - IV");
    assert_eq!(moon_name("Sol", 2, 1), "Sol - III - b");
    assert_eq!(companion_name("Sol", 0), "Sol B");
    assert_eq!(companion_name("Sol", 1), "Sol C");
}

#[test]
fn star_names_are_unique() {
    let names: HashSet<String> = (0..400).map(star_name).collect();
    assert_eq!(names.len(), 400);
}
