//! End-to-end command flows through the route table: confirmation gating,
//! name resolution, deprecated-option aliasing, chained lookups.

use crate::integration::test_utils::{session_over, MockTransport, ScriptedPrompt, BASE_URL};
use convene::cli::{
    ChannelCommands, ChannelMemberCommands, Commands, RunContext, SiteCommands, TeamCommands,
    TeamMessagingCommands,
};
use convene::commands::{
    ChannelMemberRemoveCommand, SiteRemoveCommand, TeamArchiveCommand, TeamMessagingSetCommand,
};
use serde_json::json;
use std::sync::Arc;

const TEAM_GUID: &str = "6703ac8a-c49b-4fd4-8223-28f0ac3a6402";

fn context(transport: Arc<MockTransport>, prompt: Arc<ScriptedPrompt>) -> RunContext {
    RunContext::with_parts(session_over(transport), prompt, "json".to_string())
}

fn site_remove(confirm: bool, wait: bool) -> Commands {
    Commands::Site {
        command: SiteCommands::Remove(SiteRemoveCommand {
            url: "https://contoso.example.com/sites/hr".to_string(),
            wait,
            confirm,
        }),
    }
}

fn team_archive(cmd: TeamArchiveCommand) -> Commands {
    Commands::Team {
        command: TeamCommands::Archive(cmd),
    }
}

#[tokio::test]
async fn test_declined_confirmation_makes_no_network_call() {
    let transport = MockTransport::new();
    let prompt = ScriptedPrompt::answering(false);
    let ctx = context(Arc::clone(&transport), Arc::clone(&prompt));

    let output = ctx.execute(site_remove(false, false)).await.unwrap();

    assert_eq!(output, None, "declined confirmation is silent success");
    assert!(transport.requests().is_empty());
    assert_eq!(prompt.prompts_shown().len(), 1);
    assert!(prompt.prompts_shown()[0].contains("https://contoso.example.com/sites/hr"));
}

#[tokio::test]
async fn test_confirm_flag_suppresses_prompt_and_runs() {
    let transport = MockTransport::new();
    transport.push_response(json!({
        "id": "op-1",
        "isComplete": true,
        "pollingIntervalMs": 15000
    }));
    let prompt = ScriptedPrompt::answering(false);
    let ctx = context(Arc::clone(&transport), Arc::clone(&prompt));

    ctx.execute(site_remove(true, false)).await.unwrap();

    assert!(prompt.prompts_shown().is_empty(), "no prompt with --confirm");
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(
        requests[0].url,
        format!("{}/admin/recyclebin/remove", BASE_URL)
    );
}

#[tokio::test]
async fn test_team_archive_by_unknown_name_fails_resolution() {
    let transport = MockTransport::new();
    transport.push_response(json!({ "value": [] }));
    let ctx = context(Arc::clone(&transport), ScriptedPrompt::answering(true));

    let err = ctx
        .execute(team_archive(TeamArchiveCommand {
            name: Some("Finance".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The specified team 'Finance' does not exist."
    );
    assert_eq!(transport.requests().len(), 1, "only the lookup ran");
}

#[tokio::test]
async fn test_team_archive_by_name_uses_resolved_id() {
    let transport = MockTransport::new();
    transport.push_response(json!({
        "value": [{ "id": "t-1", "displayName": "Finance", "capabilities": ["team"] }]
    }));
    transport.push_response(json!(null));
    let ctx = context(Arc::clone(&transport), ScriptedPrompt::answering(true));

    ctx.execute(team_archive(TeamArchiveCommand {
        name: Some("Finance".to_string()),
        read_only_site: true,
        ..Default::default()
    }))
    .await
    .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].url,
        format!("{}/groups?displayName=Finance", BASE_URL)
    );
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].url, format!("{}/teams/t-1/archive", BASE_URL));
    assert_eq!(
        requests[1].body,
        Some(json!({ "setSiteReadOnlyForMembers": true }))
    );
}

#[tokio::test]
async fn test_group_without_team_capability_is_not_a_team() {
    let transport = MockTransport::new();
    transport.push_response(json!({
        "value": [{ "id": "g-1", "displayName": "Finance", "capabilities": ["mail"] }]
    }));
    let ctx = context(Arc::clone(&transport), ScriptedPrompt::answering(true));

    let err = ctx
        .execute(team_archive(TeamArchiveCommand {
            name: Some("Finance".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The specified team 'Finance' does not exist."
    );
}

#[tokio::test]
async fn test_deprecated_team_id_builds_identical_request() {
    let by_id = MockTransport::new();
    by_id.push_response(json!(null));
    let ctx = context(Arc::clone(&by_id), ScriptedPrompt::answering(true));
    ctx.execute(team_archive(TeamArchiveCommand {
        id: Some(TEAM_GUID.to_string()),
        ..Default::default()
    }))
    .await
    .unwrap();

    let by_deprecated = MockTransport::new();
    by_deprecated.push_response(json!(null));
    let ctx = context(Arc::clone(&by_deprecated), ScriptedPrompt::answering(true));
    ctx.execute(team_archive(TeamArchiveCommand {
        team_id: Some(TEAM_GUID.to_string()),
        ..Default::default()
    }))
    .await
    .unwrap();

    assert_eq!(by_id.requests(), by_deprecated.requests());
}

#[tokio::test]
async fn test_usage_error_reported_before_any_network_call() {
    let transport = MockTransport::new();
    let ctx = context(Arc::clone(&transport), ScriptedPrompt::answering(true));

    let err = ctx
        .execute(team_archive(TeamArchiveCommand::default()))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Specify either id or name");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_channel_member_remove_chains_dependent_lookups() {
    let transport = MockTransport::new();
    transport.push_response(json!({
        "value": [{ "id": "t-1", "displayName": "Finance", "capabilities": ["team"] }]
    }));
    transport.push_response(json!({
        "value": [{ "id": "c-1", "displayName": "Budget", "membershipType": "private" }]
    }));
    transport.push_response(json!({
        "value": [
            { "id": "m-1", "userId": "u-1", "email": "jo@contoso.example" },
            { "id": "m-2", "userId": "u-2", "email": "sam@contoso.example" }
        ]
    }));
    transport.push_response(json!(null));
    let ctx = context(Arc::clone(&transport), ScriptedPrompt::answering(true));

    ctx.execute(Commands::Channel {
        command: ChannelCommands::Member {
            command: ChannelMemberCommands::Remove(ChannelMemberRemoveCommand {
                team_name: Some("Finance".to_string()),
                channel_name: Some("Budget".to_string()),
                user_name: Some("jo@contoso.example".to_string()),
                confirm: true,
                ..Default::default()
            }),
        },
    })
    .await
    .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(
        requests[1].url,
        format!("{}/teams/t-1/channels?displayName=Budget", BASE_URL)
    );
    assert_eq!(
        requests[2].url,
        format!("{}/teams/t-1/channels/c-1/members", BASE_URL)
    );
    assert_eq!(requests[3].method, "DELETE");
    assert_eq!(
        requests[3].url,
        format!("{}/teams/t-1/channels/c-1/members/m-1", BASE_URL)
    );
}

#[tokio::test]
async fn test_channel_member_remove_ambiguous_member_fails() {
    let transport = MockTransport::new();
    transport.push_response(json!({
        "value": [{ "id": "c-1", "displayName": "Budget", "membershipType": "private" }]
    }));
    transport.push_response(json!({
        "value": [
            { "id": "m-1", "userId": "u-1", "email": "jo@contoso.example" },
            { "id": "m-3", "userId": "u-3", "email": "JO@contoso.example" }
        ]
    }));
    let ctx = context(Arc::clone(&transport), ScriptedPrompt::answering(true));

    let err = ctx
        .execute(Commands::Channel {
            command: ChannelCommands::Member {
                command: ChannelMemberCommands::Remove(ChannelMemberRemoveCommand {
                    team_id: Some(TEAM_GUID.to_string()),
                    channel_name: Some("Budget".to_string()),
                    user_name: Some("jo@contoso.example".to_string()),
                    confirm: true,
                    ..Default::default()
                }),
            },
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Multiple members with name 'jo@contoso.example' found: m-1, m-3"
    );
    assert_eq!(transport.requests().len(), 2, "delete never attempted");
}

#[tokio::test]
async fn test_channel_member_remove_rejects_standard_channel() {
    let transport = MockTransport::new();
    transport.push_response(json!({
        "value": [{ "id": "c-1", "displayName": "Budget", "membershipType": "standard" }]
    }));
    let ctx = context(Arc::clone(&transport), ScriptedPrompt::answering(true));

    let err = ctx
        .execute(Commands::Channel {
            command: ChannelCommands::Member {
                command: ChannelMemberCommands::Remove(ChannelMemberRemoveCommand {
                    team_id: Some(TEAM_GUID.to_string()),
                    channel_name: Some("Budget".to_string()),
                    id: Some("m-1".to_string()),
                    confirm: true,
                    ..Default::default()
                }),
            },
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The specified channel 'Budget' is not a private channel."
    );
}

#[tokio::test]
async fn test_messaging_set_patches_only_supplied_settings() {
    let transport = MockTransport::new();
    transport.push_response(json!(null));
    let ctx = context(Arc::clone(&transport), ScriptedPrompt::answering(true));

    ctx.execute(Commands::Team {
        command: TeamCommands::Messaging {
            command: TeamMessagingCommands::Set(TeamMessagingSetCommand {
                team_id: TEAM_GUID.to_string(),
                allow_team_mentions: Some("true".to_string()),
                allow_user_edit_messages: Some("false".to_string()),
                ..Default::default()
            }),
        },
    })
    .await
    .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].url, format!("{}/teams/{}", BASE_URL, TEAM_GUID));
    assert_eq!(
        requests[0].body,
        Some(json!({
            "messagingSettings": {
                "allowUserEditMessages": false,
                "allowTeamMentions": true
            }
        }))
    );
}

#[tokio::test]
async fn test_invalid_output_format_fails_before_any_network_call() {
    let transport = MockTransport::new();
    transport.push_response(json!(null));
    let ctx = RunContext::with_parts(
        session_over(Arc::clone(&transport)),
        ScriptedPrompt::answering(true),
        "yaml".to_string(),
    );

    let err = ctx.execute(site_remove(true, false)).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid output format: 'yaml'. Must be 'json' or 'text'."
    );
    assert!(transport.requests().is_empty(), "operation must not run");
}

#[tokio::test]
async fn test_operation_error_passes_through_verbatim() {
    let transport = MockTransport::new();
    transport.push_operation_error("The team is already archived.");
    let ctx = context(Arc::clone(&transport), ScriptedPrompt::answering(true));

    let err = ctx
        .execute(team_archive(TeamArchiveCommand {
            id: Some(TEAM_GUID.to_string()),
            ..Default::default()
        }))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "The team is already archived.");
}
