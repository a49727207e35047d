use paillier::Paillier;
use rug::Integer;
use sampling::Source;

use crate::{Dataset, Decision, MembershipParams, Result, Server, Session};

/// Diagnostics of a local protocol run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolInfo {
    pub query: Integer,
    /// Number of elements supplied, before removing repeats.
    pub dataset_size: usize,
    pub degree: usize,
    pub coefficients: Vec<Integer>,
    /// Blinded value decrypted by the client, zero iff the query is a member.
    pub decrypted_result: Integer,
    pub is_member: bool,
    /// Plaintext membership, for checking the protocol outcome.
    pub actual_membership: bool,
}

/// Runs a full session between a fresh client holding `query` and a server
/// holding `dataset`, with randomness from the operating system.
pub fn run_protocol<Q, I, T>(query: Q, dataset: I, params: &MembershipParams) -> Result<(bool, ProtocolInfo)>
where
    Q: Into<Integer>,
    I: IntoIterator<Item = T>,
    T: Into<Integer>,
{
    let mut source: Source = Source::from_os();
    run_protocol_with_source(query, dataset, params, &mut source)
}

/// Same as [`run_protocol`] with caller-provided randomness.
pub fn run_protocol_with_source<Q, I, T>(
    query: Q,
    dataset: I,
    params: &MembershipParams,
    source: &mut Source,
) -> Result<(bool, ProtocolInfo)>
where
    Q: Into<Integer>,
    I: IntoIterator<Item = T>,
    T: Into<Integer>,
{
    let query: Integer = query.into();
    let elements: Vec<Integer> = dataset.into_iter().map(Into::into).collect();
    let dataset_size: usize = elements.len();

    let scheme: Paillier = params.scheme()?;
    let server: Server = Server::new(Dataset::new(elements), params)?;

    let mut session: Session<'_, Paillier> = Session::new(scheme, *params, &server, source);
    let decision: Decision = session.run(&query)?;
    let is_member: bool = decision.is_member;

    tracing::info!(degree = server.degree(), "protocol run complete");

    let info: ProtocolInfo = ProtocolInfo {
        actual_membership: server.dataset().contains(&query),
        query,
        dataset_size,
        degree: server.degree(),
        coefficients: server.polynomial().coefficients().to_vec(),
        decrypted_result: decision.value,
        is_member,
    };

    Ok((is_member, info))
}
