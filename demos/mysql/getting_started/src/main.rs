use sqlchain::{ConnectOptions, Database, Values};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let db = match std::env::var("SQLCHAIN_MYSQL_URL") {
        Ok(url) => Database::connect_url(&url).await?,
        Err(_) => {
            let opts = ConnectOptions::new("127.0.0.1", "root", "root", "sqlchain_demo");
            Database::connect(&opts).await?
        }
    };

    // Init table
    db.create_table("users", |t| {
        t.id();
        t.varchar_with("name", 50);
        t.varchar("email");
        t.integer_with("age", 3);
        t.timestamp("created_at", "6");
    })
    .await?;
    println!("tables: {:?}", db.show_tables().await?);

    // Insert value
    let res = db
        .table("users")
        .insert(Values::new().set("id", 1).set("name", "bob").set("age", 30))
        .execute()
        .await?;
    println!("inserted {} row(s)", res.affected_rows());

    // Query value
    let res = db
        .table("users")
        .select(["id", "name", "age"])
        .filter_op("age", ">=", 18)
        .execute()
        .await?;
    for row in res.rows() {
        println!(
            "id: {}, name: {}, age: {}",
            row.get::<u64>("id")?,
            row.get::<String>("name")?,
            row.get::<u32>("age")?
        );
    }

    db.table("users").update([("age", "31")]).find_by_id(1).execute().await?;
    db.table("users").delete().find_by_id(1).execute().await?;
    db.drop_table("users").await?;

    Ok(())
}
