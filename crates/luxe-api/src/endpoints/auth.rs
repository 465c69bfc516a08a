//! Authentication and profile endpoints.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::Result;
use crate::token::SessionToken;
use crate::types::{AuthSession, Credentials, ProfileUpdate, Registration, UserProfile};

impl ApiClient {
    /// Logs in (`POST /auth/login`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the credentials are
    /// rejected.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        let builder = self
            .request(Method::POST, "auth/login", None)?
            .json(credentials);
        self.send_data(builder).await
    }

    /// Creates an account (`POST /auth/register`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when registration is
    /// rejected (e.g. the email is taken).
    pub async fn register(&self, registration: &Registration) -> Result<AuthSession> {
        let builder = self
            .request(Method::POST, "auth/register", None)?
            .json(registration);
        self.send_data(builder).await
    }

    /// Fetches the profile behind a token (`GET /auth/profile`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or if the token is rejected.
    pub async fn profile(&self, token: &SessionToken) -> Result<UserProfile> {
        let builder = self.request(Method::GET, "auth/profile", Some(token))?;
        self.send_data(builder).await
    }

    /// Updates profile fields (`PUT /auth/profile`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<UserProfile> {
        let builder = self
            .request(Method::PUT, "auth/profile", Some(token))?
            .json(update);
        self.send_data(builder).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::client::test_support::serve_once;
    use crate::token::SessionToken;
    use crate::types::{Address, Credentials, ProfileUpdate, Registration};

    #[tokio::test]
    async fn test_login_returns_token_and_profile() {
        let (client, server) = serve_once(
            200,
            r#"{"success": true, "data": {"_id": "u1", "name": "Ana", "email": "ana@example.com", "token": "jwt"}}"#,
        )
        .await;

        let session = client
            .login(&Credentials {
                email: "ana@example.com".into(),
                password: "hunter2".into(),
            })
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.path, "/api/auth/login");
        assert!(request.header("authorization").is_none());
        assert_eq!(request.json()["email"], "ana@example.com");
        assert_eq!(session.token.as_str(), "jwt");
        assert_eq!(session.user.name, "Ana");
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let (client, server) = serve_once(401, r#"{"message": "Invalid email or password"}"#).await;

        let err = client
            .login(&Credentials {
                email: "ana@example.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        server.await.unwrap();

        assert_eq!(err.server_message(), Some("Invalid email or password"));
    }

    #[tokio::test]
    async fn test_register_posts_account() {
        let (client, server) = serve_once(
            201,
            r#"{"success": true, "data": {"_id": "u7", "name": "Bea", "email": "bea@example.com", "token": "fresh"}}"#,
        )
        .await;

        let session = client
            .register(&Registration {
                name: "Bea".into(),
                email: "bea@example.com".into(),
                password: "s3cret".into(),
            })
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/api/auth/register");
        assert!(request.header("authorization").is_none());
        assert_eq!(
            request.json(),
            serde_json::json!({"name": "Bea", "email": "bea@example.com", "password": "s3cret"})
        );
        assert_eq!(session.token.as_str(), "fresh");
        assert_eq!(session.user.id, "u7");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (client, server) = serve_once(400, r#"{"message": "User already exists"}"#).await;

        let err = client
            .register(&Registration {
                name: "Bea".into(),
                email: "bea@example.com".into(),
                password: "s3cret".into(),
            })
            .await
            .unwrap_err();
        server.await.unwrap();

        assert_eq!(err.server_message(), Some("User already exists"));
    }

    #[tokio::test]
    async fn test_update_profile_puts_changed_fields() {
        let (client, server) = serve_once(
            200,
            r#"{"data": {"_id": "u1", "name": "Ana", "email": "ana@example.com", "phone": "555-0100",
                "address": {"street": "1 Main St", "city": "Reno", "state": "NV", "zipCode": "89501", "country": "US"}}}"#,
        )
        .await;

        let update = ProfileUpdate {
            phone: Some("555-0100".into()),
            address: Some(Address {
                street: "1 Main St".into(),
                city: "Reno".into(),
                state: "NV".into(),
                zip_code: "89501".into(),
                country: "US".into(),
            }),
            ..ProfileUpdate::default()
        };
        let user = client
            .update_profile(&SessionToken::new("t1"), &update)
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/api/auth/profile");
        assert_eq!(request.header("authorization"), Some("Bearer t1"));
        let body = request.json();
        assert_eq!(body["phone"], "555-0100");
        assert_eq!(body["address"]["zipCode"], "89501");
        assert!(body.get("name").is_none());
        assert!(body.get("password").is_none());
        assert_eq!(user.phone.as_deref(), Some("555-0100"));
        assert_eq!(user.address.unwrap().city, "Reno");
    }
}
