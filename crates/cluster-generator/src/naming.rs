//! Names for stars, planets, moons and companions

const NUMERALS: [(usize, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

const STAR_PREFIXES: [&str; 16] = [
    "Al", "Be", "Ca", "Del", "Er", "Fo", "Ga", "Hy", "Ir", "Ka", "Lu", "Mi", "No", "Or", "Pe", "Ry",
];

const STAR_SUFFIXES: [&str; 12] = [
    "dara", "lon", "mir", "thea", "rion", "vex", "sha", "ctis", "nova", "zar", "phin", "ruk",
];

/// Roman numeral for a positive number; zero yields an empty string
pub fn roman(mut n: usize) -> String {
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

/// Letter designation for the n-th moon: a, b, ... z, aa, ab, ...
pub fn moon_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Star name for the n-th star of the cluster, unique per index
pub fn star_name(index: usize) -> String {
    let prefix = STAR_PREFIXES[index % STAR_PREFIXES.len()];
    let suffix = STAR_SUFFIXES[(index / STAR_PREFIXES.len()) % STAR_SUFFIXES.len()];
    let cycle = index / (STAR_PREFIXES.len() * STAR_SUFFIXES.len());
    if cycle == 0 {
        format!("{}{}", prefix, suffix)
    } else {
        format!("{}{} {}", prefix, suffix, roman(cycle + 1))
    }
}

pub fn planet_name(star: &str, planet_index: usize) -> String {
    format!("{} - {}", star, roman(planet_index + 1))
}

pub fn moon_name(star: &str, planet_index: usize, moon_index: usize) -> String {
    format!(
        "{} - {} - {}",
        star,
        roman(planet_index + 1),
        moon_letter(moon_index)
    )
}

/// "<star> B" for the first companion, "<star> C" for the second
pub fn companion_name(star: &str, companion_index: usize) -> String {
    let letter = (b'B' + (companion_index % 25) as u8) as char;
    format!("{} {}", star, letter)
}
