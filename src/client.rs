// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! EQOweb API client.
//!
//! [`Client`] owns the transport and the cached channel snapshot. Each
//! operation performs at most one round trip to the controller and takes
//! `&mut self` where it touches the snapshot, so calls on one client are
//! naturally serialized.

#[cfg(feature = "http")]
use std::time::Duration;

use indexmap::IndexMap;

use crate::channel::{Channel, ChannelMap};
use crate::command::{Command, GetGroupsCommand, LoginCommand, SetStatusCommand};
use crate::error::{Error, Result};
use crate::event::{ChannelEvent, detect_changes};
use crate::protocol::Protocol;
#[cfg(feature = "http")]
use crate::error::ProtocolError;
#[cfg(feature = "http")]
use crate::protocol::{HttpClient, HttpConfig};
use crate::response::{Envelope, GroupsResponse, LoginResponse};
use crate::types::ChannelId;

/// Authentication state of a client.
///
/// Failed operations never change the state, and no operation requires a
/// particular state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No successful login yet.
    #[default]
    Uninitialized,
    /// A login succeeded on this session.
    Authenticated,
}

/// Client for a Qbus controller's EQOweb interface.
///
/// # Examples
///
/// ```no_run
/// use eqoweb_lib::{Client, HttpConfig};
///
/// # async fn example() -> eqoweb_lib::Result<()> {
/// let mut client = Client::new(HttpConfig::new("192.168.1.50:8444"))?;
/// client.login().await?;
///
/// let mut channels = client.channels(true).await?;
/// if let Some(lamp) = channels.iter_mut().find(|c| c.name == "Lamp") {
///     client.set_channel(lamp, 1).await?;
/// }
///
/// for (id, event) in client.events().await? {
///     println!("{id}: {}", event.channel());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<P> {
    protocol: P,
    user: String,
    password: String,
    channels: Option<ChannelMap>,
    state: SessionState,
}

#[cfg(feature = "http")]
impl Client<HttpClient> {
    /// Creates a client over HTTP from a configuration.
    ///
    /// No request is sent; call [`login`](Self::login) to authenticate.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: HttpConfig) -> Result<Self> {
        let user = config.user().to_string();
        let password = config.password().to_string();
        let protocol = config.into_client()?;
        Ok(Self::with_protocol(protocol, user, password))
    }
}

/// Builder for an HTTP [`Client`].
///
/// Unset options keep the [`HttpConfig`] defaults.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use eqoweb_lib::ClientBuilder;
///
/// let client = ClientBuilder::new()
///     .url("192.168.1.50:8444")
///     .credentials("QBUS", "secret")
///     .timeout(Duration::from_secs(3))
///     .build()
///     .unwrap();
/// assert!(!client.is_authenticated());
/// ```
#[cfg(feature = "http")]
#[derive(Default)]
pub struct ClientBuilder {
    url: Option<String>,
    credentials: Option<(String, String)>,
    timeout: Option<Duration>,
}

#[cfg(feature = "http")]
impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("url", &self.url)
            .field("user", &self.credentials.as_ref().map(|(user, _)| user))
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "http")]
impl ClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the controller URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the login credentials.
    #[must_use]
    pub fn credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((user.into(), password.into()));
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client. No request is sent.
    ///
    /// # Errors
    ///
    /// Returns error if the URL is not set or empty, or the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<Client<HttpClient>> {
        let url = self
            .url
            .ok_or_else(|| ProtocolError::InvalidAddress("controller URL is required".to_string()))?;

        let mut config = HttpConfig::new(url);
        if let Some((user, password)) = self.credentials {
            config = config.with_credentials(user, password);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        Client::new(config)
    }
}

impl<P: Protocol> Client<P> {
    /// Creates a client over an arbitrary transport.
    #[must_use]
    pub fn with_protocol(protocol: P, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            protocol,
            user: user.into(),
            password: password.into(),
            channels: None,
            state: SessionState::Uninitialized,
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Returns the authentication state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` once a login has succeeded.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// Logs in with the configured credentials.
    ///
    /// No token is kept; the session cookies of the transport carry the
    /// login.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCredentials`] if the controller rejects the
    /// credentials, or any request error.
    pub async fn login(&mut self) -> Result<()> {
        let command = LoginCommand::new(self.user.as_str(), self.password.as_str());
        let response: Option<LoginResponse> = self.request(&command).await?.payload()?;

        if !response.is_some_and(|r| r.accepted()) {
            tracing::warn!(user = %self.user, "Controller rejected login");
            return Err(Error::InvalidCredentials);
        }

        tracing::debug!(user = %self.user, "Logged in");
        self.state = SessionState::Authenticated;
        Ok(())
    }

    /// Returns all channels.
    ///
    /// With `refresh` set, or when nothing is cached yet, the channels are
    /// enumerated from the controller and replace the cache. Otherwise the
    /// cached channels are returned without contacting the controller.
    ///
    /// Channels come in controller order: groups first, then the items of
    /// each group.
    ///
    /// # Errors
    ///
    /// Returns error if the enumeration request fails or a channel record
    /// cannot be decoded. The cache is left untouched on error.
    pub async fn channels(&mut self, refresh: bool) -> Result<Vec<Channel>> {
        let channels = match self.channels.take() {
            Some(cached) if !refresh => cached,
            previous => {
                self.channels = previous;
                self.fetch_channels().await?
            }
        };

        let list = channels.values().cloned().collect();
        self.channels = Some(channels);
        Ok(list)
    }

    /// Returns the cached channel map, if an enumeration has happened.
    #[must_use]
    pub fn cached_channels(&self) -> Option<&ChannelMap> {
        self.channels.as_ref()
    }

    /// Looks up a cached channel by id without contacting the controller.
    #[must_use]
    pub fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.as_ref().and_then(|channels| channels.get(&id))
    }

    /// Writes `value` to a channel.
    ///
    /// On success the channel's local value is set to `value`; the
    /// controller's answer is not consulted. The cached snapshot is left as
    /// the controller last reported it, so [`events`](Self::events) picks
    /// the change up once the controller reflects it.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails; `channel` is then unchanged.
    pub async fn set_channel(&mut self, channel: &mut Channel, value: i64) -> Result<()> {
        self.request(&SetStatusCommand::new(channel.id, value)).await?;

        tracing::debug!(channel = %channel.id, value, "Channel value set");
        channel.value = Some(value);
        Ok(())
    }

    /// Re-enumerates the channels and reports those whose value changed.
    ///
    /// Compares against the snapshot from the previous enumeration. The
    /// returned map holds the *new* channel state, keyed by id, in controller
    /// order. Channels without an entry in the previous snapshot are
    /// reported as [`ChannelEvent::Appeared`]; when no snapshot existed this
    /// applies to every channel.
    ///
    /// # Errors
    ///
    /// Returns error if the enumeration fails.
    pub async fn events(&mut self) -> Result<IndexMap<ChannelId, ChannelEvent>> {
        let new = self.fetch_channels().await?;
        let events = detect_changes(self.channels.as_ref(), &new);
        self.channels = Some(new);

        if !events.is_empty() {
            tracing::debug!(count = events.len(), "Detected channel changes");
        }
        Ok(events)
    }

    async fn fetch_channels(&self) -> Result<ChannelMap> {
        let response: GroupsResponse = self.request(&GetGroupsCommand).await?.payload()?;

        let mut channels = ChannelMap::new();
        for group in response.groups {
            for record in group.items {
                let channel = Channel::from_record(record, &group.name)?;
                channels.insert(channel.id, channel);
            }
        }

        tracing::debug!(count = channels.len(), "Enumerated channels");
        Ok(channels)
    }

    /// Sends a command and decodes the response envelope.
    ///
    /// # Errors
    ///
    /// Returns error if the transport fails, the response is malformed, or
    /// the controller reports an error code.
    pub async fn request<C: Command + Sync>(&self, command: &C) -> Result<Envelope> {
        let response = self.protocol.send_command(command).await?;
        response.envelope()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::command::{CommandCode, Message};
    use crate::error::{ParseError, ProtocolError};
    use crate::protocol::CommandResponse;
    use crate::types::ChannelType;

    /// Replays canned bodies and records every message sent.
    #[derive(Default)]
    struct ScriptedProtocol {
        replies: RefCell<VecDeque<String>>,
        sent: RefCell<Vec<Message>>,
    }

    impl ScriptedProtocol {
        fn reply(self, body: serde_json::Value) -> Self {
            self.replies.borrow_mut().push_back(body.to_string());
            self
        }

        fn sent_codes(&self) -> Vec<CommandCode> {
            self.sent.borrow().iter().map(Message::code).collect()
        }
    }

    impl Protocol for ScriptedProtocol {
        async fn send_message(
            &self,
            message: &Message,
        ) -> std::result::Result<CommandResponse, ProtocolError> {
            self.sent.borrow_mut().push(message.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .map(CommandResponse::new)
                .ok_or_else(|| ProtocolError::ConnectionFailed("no scripted reply".to_string()))
        }
    }

    fn groups(lamp_value: i64) -> serde_json::Value {
        serde_json::json!({
            "Type": 11,
            "Value": {"Groups": [
                {"Nme": "Living", "Itms": [
                    {"Nme": "Lamp", "Chnl": 5, "Ico": 0, "Val": lamp_value},
                    {"Nme": "Spots", "Chnl": 6, "Ico": 1, "Val": [40]}
                ]},
                {"Nme": "Bedroom", "Itms": [
                    {"Nme": "Blind", "Chnl": 12, "Ico": 4, "Val": 100}
                ]}
            ]}
        })
    }

    fn client(protocol: ScriptedProtocol) -> Client<ScriptedProtocol> {
        Client::with_protocol(protocol, "QBUS", "")
    }

    #[tokio::test]
    async fn login_success_authenticates() {
        let mut client =
            client(ScriptedProtocol::default().reply(serde_json::json!({"Type": 2, "Value": {"rsp": true}})));

        assert_eq!(client.state(), SessionState::Uninitialized);
        client.login().await.unwrap();
        assert!(client.is_authenticated());

        let sent = client.protocol().sent.borrow();
        assert_eq!(sent[0].code(), CommandCode::Login);
        assert_eq!(sent[0].value()["Usr"], "QBUS");
        assert_eq!(sent[0].value()["Psw"], "");
    }

    #[tokio::test]
    async fn login_rejected_is_credential_failure() {
        for value in [
            serde_json::json!({"rsp": false}),
            serde_json::json!({}),
            serde_json::Value::Null,
        ] {
            let mut client =
                client(ScriptedProtocol::default().reply(serde_json::json!({"Type": 2, "Value": value})));

            let err = client.login().await.unwrap_err();
            assert!(matches!(err, Error::InvalidCredentials));
            assert_eq!(client.state(), SessionState::Uninitialized);
        }
    }

    #[tokio::test]
    async fn cached_channels_skip_network() {
        let mut client = client(ScriptedProtocol::default().reply(groups(0)));

        let first = client.channels(false).await.unwrap();
        let second = client.channels(false).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.protocol().sent_codes(), vec![CommandCode::GetGroups]);
    }

    #[tokio::test]
    async fn channels_keep_controller_order_and_groups() {
        let mut client = client(ScriptedProtocol::default().reply(groups(0)));

        let channels = client.channels(true).await.unwrap();
        let summary: Vec<(u32, &str)> = channels
            .iter()
            .map(|c| (c.id.value(), c.group_name.as_str()))
            .collect();

        assert_eq!(summary, vec![(5, "Living"), (6, "Living"), (12, "Bedroom")]);
        assert_eq!(channels[1].value, Some(40));
        assert_eq!(channels[2].channel_type, ChannelType::Shutters);
        assert_eq!(client.channel(ChannelId::new(12)).unwrap().name, "Blind");
    }

    #[tokio::test]
    async fn refresh_replaces_cache() {
        let mut client = client(ScriptedProtocol::default().reply(groups(0)).reply(groups(1)));

        client.channels(true).await.unwrap();
        let refreshed = client.channels(true).await.unwrap();

        assert_eq!(refreshed[0].value, Some(1));
        assert_eq!(client.channel(ChannelId::new(5)).unwrap().value, Some(1));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_cache() {
        let mut client = client(ScriptedProtocol::default().reply(groups(0)));

        client.channels(true).await.unwrap();
        let err = client.channels(true).await.unwrap_err();

        assert!(matches!(err, Error::Protocol(_)));
        assert_eq!(client.cached_channels().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn empty_legacy_value_fails_enumeration() {
        let body = serde_json::json!({"Value": {"Groups": [
            {"Nme": "Living", "Itms": [{"Nme": "Lamp", "Chnl": 5, "Ico": 0, "Val": []}]}
        ]}});
        let mut client = client(ScriptedProtocol::default().reply(body));

        let err = client.channels(true).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::EmptyValueSequence { channel: 5 })
        ));
        assert!(client.cached_channels().is_none());
    }

    #[tokio::test]
    async fn set_channel_updates_local_value() {
        let mut client =
            client(ScriptedProtocol::default().reply(serde_json::json!({"Type": 13, "Value": null})));
        let mut lamp = Channel::new("Lamp", ChannelId::new(5), ChannelType::Toggle, "Living", Some(0));

        client.set_channel(&mut lamp, 1).await.unwrap();

        assert_eq!(lamp.value, Some(1));
        let sent = client.protocol().sent.borrow();
        assert_eq!(sent[0].code(), CommandCode::SetStatus);
        assert_eq!(sent[0].value(), &serde_json::json!({"Chnl": 5, "Val": [1]}));
    }

    #[tokio::test]
    async fn set_channel_failure_leaves_value() {
        let mut client =
            client(ScriptedProtocol::default().reply(serde_json::json!({"Type": 0, "Value": {"Error": 4}})));
        let mut lamp = Channel::new("Lamp", ChannelId::new(5), ChannelType::Toggle, "Living", Some(0));

        let err = client.set_channel(&mut lamp, 1).await.unwrap_err();

        assert!(matches!(err, Error::Controller(e) if e.code() == Some(4)));
        assert_eq!(lamp.value, Some(0));
    }

    #[tokio::test]
    async fn events_report_changed_channels() {
        let mut client = client(
            ScriptedProtocol::default()
                .reply(groups(0))
                .reply(groups(1))
                .reply(groups(1)),
        );

        client.channels(true).await.unwrap();

        let events = client.events().await.unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[&ChannelId::new(5)];
        assert_eq!(event.channel().value, Some(1));
        assert_eq!(event.previous_value(), Some(0));

        assert!(client.events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn events_without_snapshot_report_all_as_new() {
        let mut client = client(ScriptedProtocol::default().reply(groups(0)));

        let events = client.events().await.unwrap();

        assert_eq!(events.len(), 3);
        assert!(events.values().all(ChannelEvent::is_new));
        assert!(client.cached_channels().is_some());
    }

    #[cfg(feature = "http")]
    #[test]
    fn builder_requires_url() {
        let err = ClientBuilder::new().credentials("QBUS", "secret").build().unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::InvalidAddress(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn builder_applies_options_over_defaults() {
        let client = ClientBuilder::new().url("192.168.1.50:8444").build().unwrap();
        assert_eq!(client.user, HttpConfig::DEFAULT_USER);
        assert_eq!(client.password, "");

        let client = ClientBuilder::new()
            .url("192.168.1.50:8444")
            .credentials("admin", "secret")
            .build()
            .unwrap();
        assert_eq!(client.user, "admin");
        assert_eq!(client.password, "secret");
        assert_eq!(client.state(), SessionState::Uninitialized);
    }

    #[cfg(feature = "http")]
    #[test]
    fn builder_debug_hides_password() {
        let builder = ClientBuilder::new().credentials("admin", "secret");
        let debug = format!("{builder:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret"));
    }
}
