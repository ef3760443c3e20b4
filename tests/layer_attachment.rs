use serde_json::json;
use stix_i18n::layer::{Contents, LanguageContent};
use stix_i18n::object::{Bundle, Localized, StixId, StixObject};
use stix_i18n::resolver::{AttachLayer, ResolveError, Resolver};

fn make_id(s: &str) -> StixId {
    StixId::parse(s).unwrap()
}

fn identity() -> StixId {
    make_id("identity--311b2d2d-f010-4473-83ec-1edf84858f4c")
}

fn campaign() -> StixObject {
    StixObject::new(make_id("campaign--8e2e2d2b-17d4-4cbf-938f-98ee46b3cd3f"))
        .with_property("modified", "2016-04-06T20:03:00.000Z")
        .with_property("name", "A Campaign")
        .with_property("description", "This is a basic description of a campaign.")
        .with_property("lang", "en")
}

/// A raw language-content object for `target`, as it would appear in a bundle.
fn raw_layer(id: &str, target: &StixId, description: &str) -> StixObject {
    StixObject::new(make_id(id))
        .with_property("created", "2016-04-07T10:00:00.000Z")
        .with_property("modified", "2016-04-07T10:00:00.000Z")
        .with_property("object_ref", target.as_str())
        .with_property("object_modified", "2016-04-06T20:03:00.000Z")
        .with_property("contents", json!({ "th": { "description": description } }))
}

#[test]
fn attach_needs_exactly_one_source() {
    let camp = campaign();
    let ident = identity();
    let objects = vec![camp.clone()];
    let mut o = Resolver::new("en", &camp);

    assert!(matches!(
        o.attach_layer(AttachLayer::default()),
        Err(ResolveError::InvalidArgument(_))
    ));
    assert!(matches!(
        o.attach_layer(AttachLayer::creator(&ident).with_collection(&objects)),
        Err(ResolveError::InvalidArgument(_))
    ));
    assert!(matches!(
        o.attach_layer(
            AttachLayer::object(camp.clone())
                .with_creator(&ident)
                .with_collection(&objects),
        ),
        Err(ResolveError::InvalidArgument(_))
    ));

    assert!(o.current_layer().is_none());
}

#[test]
fn non_layer_object_is_rejected() {
    let camp = campaign();
    let mut o = Resolver::new("en", &camp);

    match o.attach_layer(AttachLayer::object(camp.clone())) {
        Err(ResolveError::InvalidArgument(msg)) => assert!(msg.contains("campaign")),
        other => panic!("expected invalid argument, got {other:?}"),
    }
    assert_eq!(o.layers().count(), 0);
}

#[test]
fn collection_without_matching_layer_is_not_found() {
    let camp = campaign();

    // Carries a matching object_ref, but is not a language-content object.
    let bogus = StixObject::new(make_id("x-bogus-lc--5f2f1e6c-3a76-4c4b-8a0e-0d7b0b6f4d1a"))
        .with_property("object_ref", camp.id().as_str());
    let bundle = Bundle::new(vec![camp.clone(), bogus]);

    let mut o = Resolver::new("en", &camp);
    match o.attach_layer(AttachLayer::bundle(&bundle)) {
        Err(ResolveError::NotFound(id)) => assert_eq!(&id, camp.id()),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn layers_for_other_objects_are_ignored() {
    let camp = campaign();
    let other = make_id("campaign--00000000-0000-4000-8000-000000000000");
    let objects = vec![raw_layer(
        "language-content--1d0a2c47-8f5e-4a28-9c61-1a5c7c3b9f40",
        &other,
        "wrong object",
    )];

    let mut o = Resolver::new("th", &camp);
    assert!(matches!(
        o.attach_layer(AttachLayer::collection(&objects)),
        Err(ResolveError::NotFound(_))
    ));
}

#[test]
fn collection_layer_becomes_current() {
    let camp = campaign();
    let layer_id = make_id("language-content--1d0a2c47-8f5e-4a28-9c61-1a5c7c3b9f40");
    let bundle = Bundle::new(vec![
        camp.clone(),
        raw_layer(layer_id.as_str(), camp.id(), "Thai"),
    ]);

    let mut o = Resolver::new("th", &camp);
    let attached = o.attach_layer(AttachLayer::bundle(&bundle)).unwrap();
    assert_eq!(attached.id, layer_id);

    assert_eq!(o.current_layer().map(|l| &l.id), Some(&layer_id));
    assert_eq!(o.resolve("description").unwrap().as_pair(), (Some("th"), "Thai"));
}

#[test]
fn first_matching_layer_in_collection_wins() {
    let camp = campaign();
    let objects = vec![
        raw_layer("language-content--aaaaaaaa-0000-4000-8000-000000000001", camp.id(), "first"),
        raw_layer("language-content--aaaaaaaa-0000-4000-8000-000000000002", camp.id(), "second"),
    ];

    let mut o = Resolver::new("th", &camp);
    o.attach_layer(AttachLayer::collection(&objects)).unwrap();

    assert_eq!(o.description().unwrap(), "first");
    assert_eq!(o.layers().count(), 1);
}

#[test]
fn typed_and_raw_layers_are_both_accepted() {
    let camp = campaign();
    let typed = LanguageContent::new(camp.id().clone(), camp.modified(), Some(identity()))
        .with_contents(Contents::new().with("th", "name", "typed"));
    let raw = raw_layer(
        "language-content--1d0a2c47-8f5e-4a28-9c61-1a5c7c3b9f40",
        camp.id(),
        "raw",
    );

    let mut o = Resolver::new("th", &camp);
    o.attach_layer(AttachLayer::object(typed.clone())).unwrap();
    o.attach_layer(AttachLayer::object(raw)).unwrap();

    assert_eq!(o.name().unwrap(), "typed");
    assert_eq!(o.description().unwrap(), "raw");
    assert_eq!(o.layers().last(), Some(&typed));
}

#[test]
fn malformed_layer_is_rejected() {
    let camp = campaign();
    let broken = StixObject::new(make_id("language-content--1d0a2c47-8f5e-4a28-9c61-1a5c7c3b9f40"))
        .with_property("object_ref", camp.id().as_str());

    let mut o = Resolver::new("th", &camp);
    assert!(matches!(
        o.attach_layer(AttachLayer::object(broken)),
        Err(ResolveError::InvalidArgument(_))
    ));
}

#[test]
fn wrong_type_is_rejected_on_both_layer_paths() {
    let camp = campaign();
    let raw = raw_layer(
        "language-content--1d0a2c47-8f5e-4a28-9c61-1a5c7c3b9f40",
        camp.id(),
        "Thai",
    );
    let json = serde_json::to_string(&raw)
        .unwrap()
        .replacen("\"type\":\"language-content\"", "\"type\":\"campaign\"", 1);
    assert!(json.contains("\"type\":\"campaign\""));

    // A typed layer can not be built from an object of another type...
    assert!(serde_json::from_str::<LanguageContent>(&json).is_err());
    assert!(LanguageContent::from_json(&json).is_err());

    // ...and the raw object is refused at attach time.
    let mut o = Resolver::new("th", &camp);
    let campaign_typed = StixObject::from_json(&json).unwrap();
    assert_eq!(campaign_typed.kind(), "campaign");
    assert!(matches!(
        o.attach_layer(AttachLayer::object(campaign_typed)),
        Err(ResolveError::InvalidArgument(_))
    ));
    assert!(o.current_layer().is_none());
}
