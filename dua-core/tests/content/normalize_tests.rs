// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for seed/update normalization

use dua_core::content::{
    classify_reference, normalize_dataset, parse_dataset, Authenticity, ContentError, SourceKind,
};
use serde_json::json;

fn normalize(document: serde_json::Value) -> dua_core::content::NormalizedDataset {
    normalize_dataset(parse_dataset(document.to_string().as_bytes()).unwrap())
}

#[test]
fn test_category_shapes() {
    let dataset = normalize(json!({
        "duas": [
            {"id": "a", "title": "A", "category": "travel"},
            {"id": "b", "title": "B", "category": {"id": "food", "name": "Food & Drink"}},
            {"id": "c", "title": "C", "category": {"id": "sleep"}}
        ],
        "categories": []
    }));

    let a = &dataset.duas[0];
    assert_eq!((a.category_id.as_str(), a.category.as_str()), ("travel", "travel"));
    let b = &dataset.duas[1];
    assert_eq!((b.category_id.as_str(), b.category.as_str()), ("food", "Food & Drink"));
    let c = &dataset.duas[2];
    assert_eq!((c.category_id.as_str(), c.category.as_str()), ("sleep", "sleep"));
}

#[test]
fn test_missing_lists_become_empty() {
    let dataset = normalize(json!({
        "duas": [{"id": "a", "title": "A", "category": "daily"}],
        "categories": []
    }));
    assert!(dataset.duas[0].tags.is_empty());
    assert!(dataset.duas[0].search_keywords.is_empty());
    assert_eq!(dataset.duas[0].reference.source, SourceKind::Other);
    assert_eq!(
        dataset.duas[0].reference.authenticity,
        Some(Authenticity::Sahih)
    );
}

#[test]
fn test_structured_reference_passes_through() {
    let dataset = normalize(json!({
        "duas": [{
            "id": "a", "title": "A", "category": "daily",
            "reference": {"source": "hadith", "book": "Riyad as-Salihin", "hadithNumber": 1456, "authenticity": "hasan"}
        }],
        "categories": []
    }));

    let reference = &dataset.duas[0].reference;
    assert_eq!(reference.source, SourceKind::Hadith);
    assert_eq!(reference.book.as_deref(), Some("Riyad as-Salihin"));
    assert_eq!(reference.hadith_number.as_deref(), Some("1456"));
    assert_eq!(reference.authenticity, Some(Authenticity::Hasan));
}

#[test]
fn test_unrecognized_reference_shape_is_other() {
    let dataset = normalize(json!({
        "duas": [
            {"id": "a", "title": "A", "category": "daily", "reference": 42},
            {"id": "b", "title": "B", "category": "daily", "reference": {"book": "No source"}}
        ],
        "categories": []
    }));
    assert!(dataset
        .duas
        .iter()
        .all(|d| d.reference.source == SourceKind::Other));
}

#[test]
fn test_reference_classification() {
    let quran = classify_reference("Quran 2:201");
    assert_eq!(quran.source, SourceKind::Quran);
    assert_eq!(quran.chapter.as_deref(), Some("2"));
    assert_eq!(quran.verse.as_deref(), Some("201"));

    let bare_quran = classify_reference("Al-QURAN, Surah Al-Falaq");
    assert_eq!(bare_quran.source, SourceKind::Quran);
    assert!(bare_quran.chapter.is_none());

    let pair_only = classify_reference("Surah 113:1-5");
    assert_eq!(pair_only.source, SourceKind::Quran);
    assert_eq!(pair_only.chapter.as_deref(), Some("113"));
    assert_eq!(pair_only.verse.as_deref(), Some("1"));

    let hadith = classify_reference("Sunan Abu Dawud 5088");
    assert_eq!(hadith.source, SourceKind::Hadith);
    assert_eq!(hadith.book.as_deref(), Some("Abu Dawud"));
    assert_eq!(hadith.authenticity, Some(Authenticity::Sahih));

    assert_eq!(classify_reference("Hisnul Muslim").source, SourceKind::Hadith);
    assert_eq!(classify_reference("Traditional").source, SourceKind::Other);
}

#[test]
fn test_category_description_fallbacks() {
    let dataset = normalize(json!({
        "duas": [],
        "categories": [
            {"id": "a", "name": "Alpha", "nameArabic": "ألفا", "nameUrdu": "الفا"},
            {"id": "b", "name": "Beta"},
            {"id": "c", "name": "Gamma", "description": "Explicit", "descriptionUrdu": "واضح", "nameUrdu": "گاما"}
        ]
    }));

    let [a, b, c] = &dataset.categories[..] else {
        panic!("expected three categories");
    };
    assert_eq!(a.description, "ألفا");
    assert_eq!(a.description_urdu.as_deref(), Some("الفا"));
    assert_eq!(b.description, "Beta");
    assert!(b.description_urdu.is_none());
    assert_eq!(c.description, "Explicit");
    assert_eq!(c.description_urdu.as_deref(), Some("واضح"));
    assert!(dataset.categories.iter().all(|c| c.dua_count == 0));
}

#[test]
fn test_version_defaults() {
    for (document, expected) in [
        (json!({"duas": [], "categories": []}), 1),
        (json!({"version": 0, "duas": [], "categories": []}), 1),
        (json!({"version": "7", "duas": [], "categories": []}), 1),
        (json!({"version": 7, "duas": [], "categories": []}), 7),
    ] {
        let raw = parse_dataset(document.to_string().as_bytes()).unwrap();
        assert_eq!(raw.version, expected, "document {}", document);
    }
}

#[test]
fn test_invalid_documents_rejected() {
    for document in [
        "not json",
        r#"{"categories": []}"#,
        r#"{"duas": []}"#,
        r#"{"duas": {}, "categories": []}"#,
        r#"[]"#,
    ] {
        let err = parse_dataset(document.as_bytes()).unwrap_err();
        assert!(
            matches!(err, ContentError::InvalidPayload(_)),
            "document {:?} gave {:?}",
            document,
            err
        );
    }
}
