use crate::cli::Cli;
use crate::commands::Commands;
use crate::documents::{load_document, parse_doc_arg};
use crate::error::{PortalError, Result as PortalResult};
use crate::intake_commands::{IntakeArgs, IntakeCommands};
use crate::role_commands::RoleCommands;
use crate::visit_commands::VisitCommands;

use mt_api::Client;
use mt_config::Config;
use mt_core::{
    CoreError, Identity, IntakeForm, MAX_VISIT_FILES, Role, SessionToken, Sightseeing,
    SightseeingPref, VerificationForm, VisaStatus, VisitRequest,
};
use mt_session::{
    Destination, GateOutcome, IdentityProvider, LocalCache, Page, SessionGate,
    StaticIdentityProvider, nav_links,
};

use std::str::FromStr;

use log::info;
use serde_json::{Value, json};

pub type PortalGate = SessionGate<StaticIdentityProvider, Client>;

/// Identity handed over on the command line, as a signed-in provider would.
///
/// Both a token and a user id are needed; anything less is signed out.
pub fn provider_from_cli(cli: &Cli) -> StaticIdentityProvider {
    let token = cli.token.as_deref().filter(|t| !t.trim().is_empty());
    let user_id = cli.user_id.as_deref().filter(|id| !id.trim().is_empty());

    let (Some(token), Some(user_id)) = (token, user_id) else {
        return StaticIdentityProvider::signed_out();
    };

    let mut identity = Identity::new(user_id);
    if let Some(ref email) = cli.email {
        identity = identity.with_email(email);
    }
    if let Some(ref name) = cli.name {
        identity = identity.with_name(name);
    }
    StaticIdentityProvider::signed_in(identity, SessionToken::new(token))
}

pub fn build_gate(cli: &Cli, config: &Config) -> PortalResult<PortalGate> {
    let client = Client::from_config(&config.api)?;
    let cache = LocalCache::open(config.cache_path()?)?;

    Ok(SessionGate::new(provider_from_cli(cli), client, cache)
        .with_timeout(config.api.timeout()))
}

/// Execute one command and return its JSON result.
pub async fn run<P: IdentityProvider>(
    command: Commands,
    gate: &SessionGate<P, Client>,
) -> PortalResult<Value> {
    match command {
        Commands::Enter { page } => {
            let page = Page::from_str(&page)?;
            Ok(serde_json::to_value(gate.enter(page).await)?)
        }

        Commands::Sync => {
            let (identity, token) = signed_in(gate).await?;
            Ok(serde_json::to_value(gate.ensure_synced(&identity, &token).await)?)
        }

        Commands::Role { action } => {
            let (identity, token) = synced(gate).await?;
            match action {
                RoleCommands::Get => {
                    let role = gate.resolve_role(&identity, &token).await;
                    Ok(json!({ "role": role, "nav": nav_links(role) }))
                }
                RoleCommands::Set { role } => {
                    let role = Role::from_str(role.trim())?;
                    let response = gate.backend().set_role(&token, &identity, role).await?;
                    gate.record_role(&identity, role);
                    info!("Role set to {role} for {}", identity.id);
                    Ok(json!({
                        "success": response.success,
                        "message": response.message,
                        "role": role,
                        "next": Page::Home.path(),
                    }))
                }
            }
        }

        Commands::Verify {
            full_name,
            age,
            budget,
            availability_days,
            visa_status,
        } => {
            let (identity, token) = synced(gate).await?;

            let mut form = VerificationForm::prefilled(identity.name.as_deref());
            if let Some(full_name) = full_name {
                form.name = full_name;
            }
            form.age = age;
            form.budget = budget;
            form.availability_days = availability_days;
            form.visa_status = VisaStatus::from_str(visa_status.trim())?;

            let request = form.to_request()?;
            let response = gate.backend().verify_profile(&token, &request).await?;
            gate.record_verified(&identity, true);

            Ok(json!({
                "message": response.message,
                "next": Page::Visits.path(),
            }))
        }

        Commands::Status => {
            let (identity, token) = synced(gate).await?;
            let verified = gate.resolve_verified(&identity, &token).await;
            Ok(json!({ "isVerified": verified }))
        }

        Commands::Visit { action } => match action {
            VisitCommands::List => {
                let outcome = gate.enter(Page::Visits).await;
                if !renders(&outcome) {
                    return Ok(serde_json::to_value(outcome)?);
                }
                let (_, token) = signed_in(gate).await?;
                let visits = gate.backend().list_visits(&token).await?;
                Ok(serde_json::to_value(visits)?)
            }
            VisitCommands::Create { complaint, docs } => {
                // Stage and validate before asking the gate, so a bad form
                // never causes network traffic.
                if docs.len() > MAX_VISIT_FILES {
                    return Err(CoreError::too_many_files(MAX_VISIT_FILES).into());
                }
                let mut request = VisitRequest::new(complaint);
                let mut documents = Vec::with_capacity(docs.len());
                for arg in &docs {
                    let (path, document_type) = parse_doc_arg(arg)?;
                    documents.push(load_document(&path, document_type).await?);
                }
                request.add_documents(documents)?;
                request.validate()?;

                let outcome = gate.enter(Page::NewVisit).await;
                if !renders(&outcome) {
                    return Ok(serde_json::to_value(outcome)?);
                }
                let (_, token) = signed_in(gate).await?;
                let visit = gate.backend().create_visit(&token, &request).await?;
                Ok(json!({
                    "visit": visit,
                    "next": Page::Visits.path(),
                }))
            }
        },

        Commands::Intake { action } => {
            let (identity, token) = synced(gate).await?;
            match action {
                IntakeCommands::Get => {
                    let record = gate.backend().get_intake(&token).await?;
                    Ok(json!({
                        "editMode": record.is_some(),
                        "record": record,
                    }))
                }
                IntakeCommands::Submit(args) => {
                    let submission = intake_form(args)?.to_submission(&identity.id)?;
                    let result = gate.backend().submit_intake(&token, &submission).await?;
                    Ok(json!({
                        "result": result,
                        "next": Page::Profile.path(),
                    }))
                }
            }
        }

        Commands::Profile => {
            let (_, token) = synced(gate).await?;
            let client = gate.backend();
            let (intake, visits) =
                tokio::join!(client.get_intake(&token), client.list_visits(&token));
            Ok(json!({
                "intake": intake?,
                "visits": visits?,
            }))
        }
    }
}

/// Build the intake form from flags, the way the form would be filled in.
pub fn intake_form(args: IntakeArgs) -> PortalResult<IntakeForm> {
    let mut form = IntakeForm {
        full_name: args.full_name,
        age: args.age,
        phone: args.phone,
        country: args.country,
        budget: args.budget,
        has_sightseeing: if args.sightseeing {
            Sightseeing::Yes
        } else {
            Sightseeing::No
        },
        sightseeing_days: args.sightseeing_days,
        notes: args.notes,
        ..IntakeForm::default()
    };
    for pref in &args.prefs {
        let pref = SightseeingPref::from_str(pref.trim())?;
        if !form.sightseeing_prefs.contains(&pref) {
            form.toggle_pref(pref);
        }
    }
    Ok(form)
}

fn renders(outcome: &GateOutcome) -> bool {
    matches!(outcome.destination(), Some(Destination::Requested(_)))
}

async fn signed_in<P: IdentityProvider>(
    gate: &SessionGate<P, Client>,
) -> PortalResult<(Identity, SessionToken)> {
    gate.signed_in().await.ok_or_else(PortalError::signed_out)
}

/// Signed-in identity with the backend record synced, as on any page mount.
async fn synced<P: IdentityProvider>(
    gate: &SessionGate<P, Client>,
) -> PortalResult<(Identity, SessionToken)> {
    let (identity, token) = signed_in(gate).await?;
    gate.ensure_synced(&identity, &token).await;
    Ok((identity, token))
}
