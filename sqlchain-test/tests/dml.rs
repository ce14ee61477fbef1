use sqlchain::{error::Error, Database, QueryResult, Values};
use sqlchain_test::{run_test, RecordingDriver};

#[tokio::test]
async fn test_select() {
    run_test(|db: Database, driver: RecordingDriver| async move {
        db.table("users")
            .select(["id", "name"])
            .filter("email", "bob@example.com")
            .execute()
            .await
            .unwrap();
        db.table("users")
            .select(Vec::<&str>::new())
            .execute()
            .await
            .unwrap();

        assert_eq!(
            driver.statements(),
            vec![
                "SELECT id, name FROM `users` WHERE `email` = 'bob@example.com';",
                "SELECT * FROM `users`;",
            ]
        );
    })
    .await;
}

#[tokio::test]
async fn test_execute_returns_driver_result() {
    run_test(|db: Database, driver: RecordingDriver| async move {
        driver.respond_rows("name", &["bob", "alice"]);
        driver.respond(QueryResult::Affected {
            rows: 1,
            last_insert_id: Some(42),
        });

        let res = db.table("users").select(["name"]).execute().await.unwrap();
        let names = res
            .rows()
            .iter()
            .map(|row| row.get::<String>("name").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["bob", "alice"]);

        let res = db
            .table("users")
            .insert([("name", "carol")])
            .execute()
            .await
            .unwrap();
        assert_eq!(res.affected_rows(), 1);
        assert_eq!(res.last_insert_id(), Some(42));
    })
    .await;
}

#[tokio::test]
async fn test_insert_update_order() {
    run_test(|db: Database, driver: RecordingDriver| async move {
        let values = Values::new()
            .set("name", "bob")
            .set("age", 30)
            .set("city", "Paris");

        db.table("users").insert(values.clone()).execute().await.unwrap();
        db.table("users")
            .update(values)
            .find_by_id(5)
            .execute()
            .await
            .unwrap();

        assert_eq!(
            driver.statements(),
            vec![
                "INSERT INTO `users` SET `name` = 'bob', `age` = '30', `city` = 'Paris';",
                "UPDATE `users` SET `name` = 'bob', `age` = '30', `city` = 'Paris' WHERE `id` = '5';",
            ]
        );
    })
    .await;
}

#[tokio::test]
async fn test_filter_replaced() {
    run_test(|db: Database, driver: RecordingDriver| async move {
        db.table("users")
            .select(["id"])
            .filter("name", "bob")
            .filter_op("age", ">", 20)
            .execute()
            .await
            .unwrap();

        assert_eq!(
            driver.statements(),
            vec!["SELECT id FROM `users` WHERE `age` > '20';"]
        );
    })
    .await;
}

#[tokio::test]
async fn test_delete_without_filter() {
    run_test(|db: Database, driver: RecordingDriver| async move {
        db.table("users").delete().execute().await.unwrap();
        db.table("users").delete().find_by_id("3").execute().await.unwrap();

        assert_eq!(
            driver.statements(),
            vec!["DELETE FROM `users`;", "DELETE FROM `users` WHERE `id` = '3';"]
        );
    })
    .await;
}

#[tokio::test]
async fn test_values_sanitized() {
    run_test(|db: Database, driver: RecordingDriver| async move {
        db.table(" users ")
            .update([("bio", "<b>it's</b>")])
            .filter("name", " o'neil ")
            .execute()
            .await
            .unwrap();

        assert_eq!(
            driver.statements(),
            vec![
                "UPDATE `users` SET `bio` = '&lt;b&gt;it\\&#039;s&lt;/b&gt;' WHERE `name` = 'o\\&#039;neil';"
            ]
        );
    })
    .await;
}

#[tokio::test]
async fn test_build_errors_do_not_reach_driver() {
    run_test(|db: Database, driver: RecordingDriver| async move {
        let res = db.table("users").filter("id", 1).execute().await;
        assert!(matches!(res, Err(Error::Build(_))));

        let res = db.table("users").insert(Values::new()).execute().await;
        assert!(matches!(res, Err(Error::Build(_))));

        assert!(driver.statements().is_empty());
    })
    .await;
}

#[tokio::test]
async fn test_fresh_query_per_statement() {
    run_test(|db: Database, driver: RecordingDriver| async move {
        db.table("users")
            .select(["id"])
            .filter("id", 1)
            .execute()
            .await
            .unwrap();
        db.table("users").delete().execute().await.unwrap();

        assert_eq!(
            driver.statements(),
            vec!["SELECT id FROM `users` WHERE `id` = '1';", "DELETE FROM `users`;"]
        );
    })
    .await;
}

#[tokio::test]
async fn test_render_without_execute() {
    run_test(|db: Database, driver: RecordingDriver| async move {
        let query = db.table("posts").select(["title"]).filter_op("title", "LIKE", "%rust%");

        assert_eq!(
            query.render().unwrap(),
            "SELECT title FROM `posts` WHERE `title` LIKE '%rust%';"
        );
        assert!(driver.statements().is_empty());
    })
    .await;
}

#[tokio::test]
async fn test_driver_error_propagates() {
    run_test(|db: Database, driver: RecordingDriver| async move {
        driver.fail(sqlchain::error::database!("Table 'app.users' doesn't exist"));

        let res = db.table("users").select(["id"]).execute().await;
        match res {
            Err(Error::Database(msg)) => assert_eq!(msg, "Table 'app.users' doesn't exist"),
            other => panic!("unexpected result: {:?}", other),
        }
    })
    .await;
}
