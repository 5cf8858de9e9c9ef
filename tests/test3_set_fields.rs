use layoutdb_middleware::prelude::*;

async fn tasks_client()
-> Result<(MemoryStore, RecordStoreClient<MemoryConnection>), LayoutDbError> {
    let store = MemoryStore::new();
    store.define_layout("Tasks", &["title", "status"]).await;
    let options = StoreOptions::new("db.example.net", "ops", "webuser", "secret");
    let conn = store.connect(&options).await?;
    Ok((store, RecordStoreClient::new(conn)))
}

#[tokio::test]
async fn set_fields_commits_only_the_last_record() -> Result<(), Box<dyn std::error::Error>> {
    let (_store, mut client) = tasks_client().await?;
    for title in ["a", "b", "c"] {
        client
            .insert("Tasks", &[("title", title), ("status", "open")])
            .await?;
    }

    let mut found = client.select("Tasks", &[("status", "open")]).await?;
    assert_eq!(found.len(), 3);

    client.set_fields(&mut found, &[("status", "done")]).await?;

    // Assignments were staged on every record, but only the last
    // record's commit went through.
    let after = client.select("Tasks", &[]).await?;
    let statuses: Vec<&str> = after
        .iter()
        .map(|rec| rec.get("status").unwrap_or(""))
        .collect();
    assert_eq!(statuses, vec!["open", "open", "done"]);

    // The snapshot taken at select time is not refreshed by staging.
    assert!(found.iter().all(|rec| rec.get("status") == Some("open")));
    Ok(())
}

#[tokio::test]
async fn set_fields_commit_failure_propagates_the_code() -> Result<(), Box<dyn std::error::Error>>
{
    let (_store, mut client) = tasks_client().await?;
    client
        .insert("Tasks", &[("title", "a"), ("status", "open")])
        .await?;

    let mut found = client.select("Tasks", &[]).await?;
    let res = client.set_fields(&mut found, &[("bogus", "x")]).await;
    assert_eq!(error_code(&res), 102);
    Ok(())
}
