//! End-to-end phrasing of the reference times, plain and vocalized.

#![allow(clippy::unwrap_used)]

use mahashaa_core::{ClockTime, Vocalization, compose, nikud, phrase_now, reverse_for_display};

/// `HH:MM` input and the expected plain phrase.
const REFERENCE: &[(&str, &str)] = &[
    ("00:00", "חצות"),
    ("00:03", "חצות ושלוש דקות"),
    ("10:00", "עשר בבוקר"),
    ("10:05", "עשר וחמישה בבוקר"),
    ("10:07", "עשר ושבע דקות בבוקר"),
    ("10:10", "עשר ועשרה בבוקר"),
    ("10:15", "עשר ורבע בבוקר"),
    ("10:30", "עשר וחצי בבוקר"),
    ("10:39", "עשר שלושים ותשע בבוקר"),
    ("10:40", "עשרים לאחת עשרה בבוקר"),
    ("13:00", "אחת בצהריים"),
    ("14:15", "שתיים ורבע בצהריים"),
    ("17:30", "חמש וחצי אחר הצהריים"),
    ("19:45", "רבע לשמונה בערב"),
    ("23:50", "עשרה לחצות"),
    ("03:10", "שלוש ועשרה בלילה"),
];

fn parse(input: &str) -> ClockTime {
    input.parse().unwrap()
}

#[test]
fn reference_times_plain() {
    let failures: Vec<String> = REFERENCE
        .iter()
        .filter_map(|&(input, expected)| {
            let actual = compose(parse(input), Vocalization::Plain);
            (actual != expected).then(|| format!("{input}: got {actual:?}, want {expected:?}"))
        })
        .collect();
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn reference_times_vocalized_strip_to_plain() {
    for &(input, expected) in REFERENCE {
        let vocalized = compose(parse(input), Vocalization::Full);
        assert_ne!(vocalized, expected, "{input} carries no nikud");
        assert_eq!(nikud::strip(&vocalized), expected, "{input}");
    }
}

#[test]
fn vocalized_samples() {
    let cases = [
        ("10:15", "עֶשֶׂר וְרֶבַע בַּבּוֹקֶר"),
        ("10:05", "עֶשֶׂר וַחֲמִישָּׁה בַּבּוֹקֶר"),
        ("14:15", "שְׁתַּיִים וְרֶבַע בַּצָּהֳרַיִים"),
        ("17:30", "חָמֵשׁ וָחֵצִי אַחַר הַצָּהֳרַיִים"),
        ("19:45", "רֶבַע לִשְׁמוֹנֶה בָּעֶרֶב"),
        ("23:50", "עֲשָׂרָה לַחֲצוֹת"),
        ("10:22", "עֶשֶׂר עֶשְׂרִים וּשְׁתַּיִים בַּבּוֹקֶר"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            compose(parse(input), Vocalization::Full),
            nikud::normalize(expected),
            "{input}"
        );
    }
}

#[test]
fn vocalized_output_is_nfc() {
    for &(input, _) in REFERENCE {
        let vocalized = compose(parse(input), Vocalization::Full);
        assert_eq!(nikud::normalize(&vocalized), vocalized, "{input}");
    }
}

#[test]
fn display_order_for_terminal() {
    let phrase = compose(parse("19:45"), Vocalization::Plain);
    assert_eq!(reverse_for_display(&phrase), "ברעב הנומשל עבר");
}

#[test]
fn phrase_now_produces_a_phrase() {
    let phrase = phrase_now(Vocalization::Plain).unwrap();
    assert!(!phrase.is_empty());
}
