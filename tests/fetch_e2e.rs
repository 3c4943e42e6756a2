use idquery::{
    fetch, Entity, FetchError, Identity, InMemoryQuery, Query, QueryError, QueryExt, Theorise,
};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
struct Invoice {
    id: Uuid,
    total_cents: i64,
    settled: bool,
}

impl Invoice {
    fn new(id: Uuid, total_cents: i64) -> Self {
        Self {
            id,
            total_cents,
            settled: false,
        }
    }
}

impl Entity for Invoice {
    type Key = Uuid;
}

impl Theorise for Invoice {
    fn theorise(key: Uuid) -> Self {
        Self::new(key, 0)
    }
}

fn store_with_invoice() -> (InMemoryQuery<Invoice>, Uuid) {
    let store = InMemoryQuery::new();
    let id = Uuid::new_v4();
    store.insert(id, Invoice::new(id, 12_500)).unwrap();
    (store, id)
}

#[test]
fn get_resolves_stored_invoice() {
    let (store, id) = store_with_invoice();
    let identity = Identity::<Invoice>::new(id);

    let found = fetch::get(Some(&store), Some(&identity)).unwrap();

    let invoice = found.expect("stored invoice should resolve");
    assert_eq!(invoice.id, id);
    assert_eq!(invoice.total_cents, 12_500);
}

#[test]
fn get_unknown_key_resolves_to_nothing() {
    let (store, _) = store_with_invoice();
    let identity = Identity::<Invoice>::new(Uuid::new_v4());

    let found = fetch::get(Some(&store), Some(&identity)).unwrap();
    assert!(found.is_none());
}

#[test]
fn absent_identities_short_circuit() {
    let (store, _) = store_with_invoice();

    let no_identity = fetch::get::<Invoice, _>(Some(&store), None).unwrap();
    assert!(no_identity.is_none());

    let valueless = Identity::<Invoice>::absent();
    let no_value = fetch::get(Some(&store), Some(&valueless)).unwrap();
    assert!(no_value.is_none());

    let theorised = fetch::theorise(Some(&store), Some(&valueless)).unwrap();
    assert!(theorised.is_none());
}

#[test]
fn missing_handle_is_an_invalid_argument() {
    let identity = Identity::<Invoice>::new(Uuid::new_v4());

    let err = fetch::get::<Invoice, InMemoryQuery<Invoice>>(None, Some(&identity)).unwrap_err();
    let FetchError::MissingArgument { parameter } = err else {
        panic!("expected missing-argument error, got {err:?}");
    };
    assert_eq!(parameter, "query");

    let err = fetch::theorise::<Invoice, InMemoryQuery<Invoice>>(None, None).unwrap_err();
    assert!(err.is_missing_argument());
}

#[test]
fn theorise_manufactures_unverified_invoice() {
    let (store, _) = store_with_invoice();
    let phantom_id = Uuid::new_v4();
    let identity = Identity::<Invoice>::new(phantom_id);

    let theorised = fetch::theorise(Some(&store), Some(&identity)).unwrap();

    let invoice = theorised.expect("usable identity always yields an instance");
    assert_eq!(invoice.id, phantom_id);
    assert_eq!(invoice.total_cents, 0);
}

#[test]
fn extension_methods_mirror_free_functions() {
    let (store, id) = store_with_invoice();

    let found = store.get_identified(Some(&Identity::new(id))).unwrap();
    assert!(found.is_some());

    let skipped = store.theorise_identified(None).unwrap();
    assert!(skipped.is_none());
}

#[test]
fn handle_failures_propagate_unchanged() {
    struct OfflineQuery;

    impl Query<Invoice> for OfflineQuery {
        fn get(&self, _key: &Uuid) -> Result<Option<Invoice>, QueryError> {
            Err(QueryError::Connection("data source offline".to_string()))
        }

        fn theorise(&self, _key: &Uuid) -> Result<Invoice, QueryError> {
            Err(QueryError::Connection("data source offline".to_string()))
        }
    }

    let identity = Identity::<Invoice>::new(Uuid::new_v4());

    let err = fetch::get(Some(&OfflineQuery), Some(&identity)).unwrap_err();
    assert!(err.is_query());
    assert!(err.to_string().contains("data source offline"));

    // The guard still wins over the handle when the identity is unusable.
    let skipped = fetch::theorise::<Invoice, _>(Some(&OfflineQuery), None).unwrap();
    assert!(skipped.is_none());
}

#[test]
fn identity_round_trips_through_json() {
    let id = Uuid::new_v4();
    let identity = Identity::<Invoice>::new(id);

    let json = serde_json::to_string(&identity).unwrap();
    let decoded: Identity<Invoice> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, identity);
    assert_eq!(decoded.value(), Some(&id));
}
