use layoutdb_middleware::prelude::*;

async fn contacts_client()
-> Result<(MemoryStore, RecordStoreClient<MemoryConnection>), LayoutDbError> {
    let store = MemoryStore::new();
    store.define_layout("Contacts", &["name"]).await;
    let options = StoreOptions::new("db.example.net", "crm", "webuser", "secret");
    let conn = store.connect(&options).await?;
    Ok((store, RecordStoreClient::new(conn)))
}

#[tokio::test]
async fn unimplemented_operations_signal_explicitly() -> Result<(), Box<dyn std::error::Error>> {
    let (_store, mut client) = contacts_client().await?;

    let res = client.delete("Contacts", 1).await;
    assert!(matches!(res, Err(LayoutDbError::Unimplemented(_))));
    assert_eq!(error_code(&res), -1);

    let res = client.last_insert_id().await;
    assert!(matches!(res, Err(LayoutDbError::Unimplemented(_))));
    Ok(())
}

#[tokio::test]
async fn remote_codes_pass_through_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let (_store, mut client) = contacts_client().await?;

    let res = client.select("Ghost", &[]).await;
    assert_eq!(error_code(&res), 105);
    // A failed select does not become the session's last layout.
    assert_eq!(client.last_layout(), None);

    let res = client
        .update_record_by_id("Contacts", &[("name", "x")], 99)
        .await;
    assert_eq!(error_code(&res), 101);

    let res = client.insert("Contacts", &[("bogus", "x")]).await;
    assert_eq!(error_code(&res), 102);
    Ok(())
}

#[tokio::test]
async fn connect_checks_credentials_and_targets() {
    let store = MemoryStore::new().with_credentials("webuser", "secret");

    let wrong = StoreOptions::new("db.example.net", "crm", "webuser", "nope");
    let err = store.connect(&wrong).await.unwrap_err();
    assert_eq!(err.code(), 212);

    let no_host = StoreOptions::new("", "crm", "webuser", "secret");
    let err = store.connect(&no_host).await.unwrap_err();
    assert_eq!(err.code(), 802);

    let good = StoreOptions::new("db.example.net", "crm", "webuser", "secret");
    assert!(store.connect(&good).await.is_ok());
}
