use ratenest::configuration::{get_configuration, DatabaseSettings, Settings};
use sqlx::{Connection, Executor, PgConnection, PgPool};

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub api_client: reqwest::Client,
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();
    configuration.uploads_dir = std::env::temp_dir()
        .join(format!("uploads-{}", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = ratenest::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
        api_client: reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap(),
    })
}

pub async fn spawn_app() -> Option<TestApp> {
    let configuration = get_configuration().expect("Failed to get configuration");
    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

impl TestApp {
    /// Registers a user and returns the session token from the response.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .api_client
            .post(format!("{}/auth/signup", self.address))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute signup request");
        assert_eq!(response.status().as_u16(), 201);

        let body: serde_json::Value = response.json().await.expect("signup body is not json");
        body["item"]["token"]
            .as_str()
            .expect("signup response has no token")
            .to_string()
    }

    pub async fn promote_to_admin(&self, email: &str) {
        sqlx::query("UPDATE users SET role = 'admin' WHERE email = $1")
            .bind(email)
            .execute(&self.db_pool)
            .await
            .expect("failed to promote user");
    }

    pub async fn insert_plan(&self, name: &str) -> i32 {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO subscriptions
                (name, description, features, price_weekly, price_monthly, price_yearly)
            VALUES ($1, 'test plan', '["listing"]'::jsonb, 5.0, 15.0, 150.0)
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(&self.db_pool)
        .await
        .expect("failed to insert plan")
    }

    pub async fn insert_product(&self, owner_email: &str, title: &str, status: &str) -> i32 {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO products
                (user_id, title, description, main_image, other_images,
                 category, sub_category, status)
            SELECT id, $2, 'a product', '/uploads/x.png', '', 'electronics', 'gadgets', $3
            FROM users WHERE email = $1
            RETURNING id
            "#,
        )
        .bind(owner_email)
        .bind(title)
        .bind(status)
        .fetch_one(&self.db_pool)
        .await
        .expect("failed to insert product")
    }
}

/// Smallest payload that passes the server's image sniffing.
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[0u8; 16]);
    bytes
}

/// Sniffs as a gif; useful when a test must tell two uploads apart
/// by the extension of the stored file.
pub fn gif_bytes() -> Vec<u8> {
    let mut bytes = vec![0x47, 0x49, 0x46, 0x38, 0x39, 0x61];
    bytes.extend_from_slice(&[0u8; 16]);
    bytes
}
