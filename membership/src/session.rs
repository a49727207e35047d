use std::fmt;

use paillier::AdditiveHomomorphic;
use rug::Integer;
use sampling::Source;

use crate::{Client, Decision, MembershipError, MembershipParams, QueryMessage, ResponseMessage, Result, Server};

/// Tag of a [`ProtocolState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    KeysGenerated,
    PowersEncrypted,
    Evaluated,
    Blinded,
    Decided,
    Aborted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Stage::KeysGenerated => "KeysGenerated",
            Stage::PowersEncrypted => "PowersEncrypted",
            Stage::Evaluated => "Evaluated",
            Stage::Blinded => "Blinded",
            Stage::Decided => "Decided",
            Stage::Aborted => "Aborted",
        };
        f.write_str(name)
    }
}

/// Per-session protocol state. The client, and with it the key pair, lives
/// inside the state until the decision consumes it.
pub enum ProtocolState<S: AdditiveHomomorphic> {
    KeysGenerated(Client<S>),
    PowersEncrypted {
        client: Client<S>,
        query: QueryMessage<S>,
    },
    Evaluated {
        client: Client<S>,
        public_key: S::PublicKey,
        evaluation: S::Ciphertext,
    },
    Blinded {
        client: Client<S>,
        response: ResponseMessage<S>,
    },
    Decided(Decision),
    Aborted,
}

impl<S: AdditiveHomomorphic> ProtocolState<S> {
    pub fn stage(&self) -> Stage {
        match self {
            ProtocolState::KeysGenerated(_) => Stage::KeysGenerated,
            ProtocolState::PowersEncrypted { .. } => Stage::PowersEncrypted,
            ProtocolState::Evaluated { .. } => Stage::Evaluated,
            ProtocolState::Blinded { .. } => Stage::Blinded,
            ProtocolState::Decided(_) => Stage::Decided,
            ProtocolState::Aborted => Stage::Aborted,
        }
    }
}

impl<S: AdditiveHomomorphic> fmt::Debug for ProtocolState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProtocolState::{}", self.stage())
    }
}

/// One protocol run between a fresh [`Client`] and a shared [`Server`].
///
/// Transitions must be called in order:
/// `encrypt_query` → `evaluate` → `blind` → `decide`.
/// Any failure, including an out-of-order call, aborts the session and drops
/// the client key pair. An aborted session cannot be resumed.
pub struct Session<'a, S: AdditiveHomomorphic + Clone> {
    scheme: S,
    server: &'a Server,
    server_source: Source,
    state: ProtocolState<S>,
}

impl<'a, S: AdditiveHomomorphic + Clone> Session<'a, S> {
    /// Generates the client key pair. Client and server randomness are
    /// branched from `source`.
    pub fn new(scheme: S, params: MembershipParams, server: &'a Server, source: &mut Source) -> Self {
        let client: Client<S> = Client::new(scheme.clone(), params, source.branch());
        Self {
            scheme,
            server,
            server_source: source.branch(),
            state: ProtocolState::KeysGenerated(client),
        }
    }

    pub fn state(&self) -> &ProtocolState<S> {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    pub fn decision(&self) -> Option<&Decision> {
        match &self.state {
            ProtocolState::Decided(decision) => Some(decision),
            _ => None,
        }
    }

    /// `KeysGenerated` → `PowersEncrypted`.
    pub fn encrypt_query(&mut self, query: &Integer) -> Result<()> {
        let state: ProtocolState<S> = self.take();
        let found: Stage = state.stage();
        let ProtocolState::KeysGenerated(mut client) = state else {
            return Err(out_of_order(Stage::KeysGenerated, found));
        };

        let query: QueryMessage<S> = client.encrypt_query(query, self.server.degree())?;
        self.state = ProtocolState::PowersEncrypted { client, query };
        Ok(())
    }

    /// `PowersEncrypted` → `Evaluated`.
    pub fn evaluate(&mut self) -> Result<()> {
        let state: ProtocolState<S> = self.take();
        let found: Stage = state.stage();
        let ProtocolState::PowersEncrypted { client, query } = state else {
            return Err(out_of_order(Stage::PowersEncrypted, found));
        };

        let evaluation: S::Ciphertext = self
            .server
            .evaluate(&self.scheme, &query, &mut self.server_source)?;
        self.state = ProtocolState::Evaluated {
            client,
            public_key: query.public_key,
            evaluation,
        };
        Ok(())
    }

    /// `Evaluated` → `Blinded`.
    pub fn blind(&mut self) -> Result<()> {
        let state: ProtocolState<S> = self.take();
        let found: Stage = state.stage();
        let ProtocolState::Evaluated {
            client,
            public_key,
            evaluation,
        } = state
        else {
            return Err(out_of_order(Stage::Evaluated, found));
        };

        let response: ResponseMessage<S> =
            self.server
                .blind(&self.scheme, &public_key, &evaluation, &mut self.server_source)?;
        self.state = ProtocolState::Blinded { client, response };
        Ok(())
    }

    /// `Blinded` → `Decided`.
    pub fn decide(&mut self) -> Result<Decision> {
        let state: ProtocolState<S> = self.take();
        let found: Stage = state.stage();
        let ProtocolState::Blinded { client, response } = state else {
            return Err(out_of_order(Stage::Blinded, found));
        };

        let decision: Decision = client.decide(&response)?;
        self.state = ProtocolState::Decided(decision.clone());
        Ok(decision)
    }

    /// Runs every remaining transition for `query`.
    pub fn run(&mut self, query: &Integer) -> Result<Decision> {
        self.encrypt_query(query)?;
        self.evaluate()?;
        self.blind()?;
        self.decide()
    }

    // Leaves the session aborted until the caller stores the next state.
    fn take(&mut self) -> ProtocolState<S> {
        std::mem::replace(&mut self.state, ProtocolState::Aborted)
    }
}

fn out_of_order(expected: Stage, found: Stage) -> MembershipError {
    MembershipError::OutOfOrder { expected, found }
}
