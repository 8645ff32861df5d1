//! Integration test: RFC 3986 section 5.4 reference resolution examples.
//!
//! All references are resolved against `http://a/b/c/d;p?q`, through both
//! `Url::join` and the `+` operator.

use yurl_core::Url;

const BASE: &str = "http://a/b/c/d;p?q";

fn assert_resolves(cases: &[(&str, &str)]) {
    let base = Url::parse(BASE);
    for &(reference, expected) in cases {
        let reference_url = Url::parse(reference);
        let joined = base.join(&reference_url);
        assert_eq!(joined.to_string(), expected, "reference {reference:?}");
        assert_eq!(&base + &reference_url, joined, "reference {reference:?}");
    }
}

#[test]
fn normal_examples() {
    assert_resolves(&[
        ("g:h", "g:h"),
        ("g", "http://a/b/c/g"),
        ("./g", "http://a/b/c/g"),
        ("g/", "http://a/b/c/g/"),
        ("/g", "http://a/g"),
        ("//g", "http://g"),
        ("?y", "http://a/b/c/d;p?y"),
        ("g?y", "http://a/b/c/g?y"),
        ("#s", "http://a/b/c/d;p?q#s"),
        ("g#s", "http://a/b/c/g#s"),
        ("g?y#s", "http://a/b/c/g?y#s"),
        (";x", "http://a/b/c/;x"),
        ("g;x", "http://a/b/c/g;x"),
        ("g;x?y#s", "http://a/b/c/g;x?y#s"),
        ("", "http://a/b/c/d;p?q"),
        (".", "http://a/b/c/"),
        ("./", "http://a/b/c/"),
        ("..", "http://a/b/"),
        ("../", "http://a/b/"),
        ("../g", "http://a/b/g"),
        ("../..", "http://a/"),
        ("../../", "http://a/"),
        ("../../g", "http://a/g"),
    ]);
}

#[test]
fn abnormal_examples() {
    assert_resolves(&[
        ("../../../g", "http://a/g"),
        ("../../../../g", "http://a/g"),
        ("/./g", "http://a/g"),
        ("/../g", "http://a/g"),
        ("g.", "http://a/b/c/g."),
        (".g", "http://a/b/c/.g"),
        ("g..", "http://a/b/c/g.."),
        ("..g", "http://a/b/c/..g"),
        ("./../g", "http://a/b/g"),
        ("./g/.", "http://a/b/c/g/"),
        ("g/./h", "http://a/b/c/g/h"),
        ("g/../h", "http://a/b/c/h"),
        ("g;x=1/./y", "http://a/b/c/g;x=1/y"),
        ("g;x=1/../y", "http://a/b/c/y"),
        ("g?y/./x", "http://a/b/c/g?y/./x"),
        ("g?y/../x", "http://a/b/c/g?y/../x"),
        ("g#s/./x", "http://a/b/c/g#s/./x"),
        ("g#s/../x", "http://a/b/c/g#s/../x"),
        ("http:g", "http:g"),
    ]);
}

#[test]
fn resolution_leaves_operands_untouched() {
    let base = Url::parse(BASE);
    let reference = Url::parse("../g");
    let _ = &base + &reference;
    assert_eq!(base.to_string(), BASE);
    assert_eq!(reference.to_string(), "../g");
}
