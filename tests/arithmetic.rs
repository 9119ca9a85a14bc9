use bcd_decimal::BigDecimal;

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

#[test]
fn add_carries_across_the_sixteen_digit_word_boundary() {
    let z = &dec("9999999999999999") + &dec("1");
    assert_eq!(z.to_decimal_string(), "10000000000000000");
}

#[test]
fn add_does_not_carry_one_short_of_the_boundary() {
    let z = &dec("9999999999999998") + &dec("1");
    assert_eq!(z.to_decimal_string(), "9999999999999999");
}

#[test]
fn sub_underflow_panics() {
    let result = std::panic::catch_unwind(|| &dec("1") - &dec("2"));
    assert!(result.is_err());
}

#[test]
fn div_by_zero_panics() {
    let result = std::panic::catch_unwind(|| {
        let mut q = BigDecimal::new();
        let mut r = BigDecimal::new();
        q.div_rem(&mut r, &dec("1"), &BigDecimal::new());
    });
    assert!(result.is_err());
}

#[test]
fn ord_agrees_with_decimal_string_length_then_value_comparison() {
    let values = ["0", "1", "9", "10", "99", "100", "9999999999999999", "10000000000000000", "99999999999999990000000000000001"];
    for a in values {
        for b in values {
            let expected = (a.len(), a).cmp(&(b.len(), b));
            assert_eq!(dec(a).cmp(&dec(b)), expected, "comparing {a} and {b}");
        }
    }
}
