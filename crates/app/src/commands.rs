//! Command handlers
//!
//! Every backend command prints the payload as pretty JSON on stdout, or the
//! error message on stderr with a failing exit code.

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use planeats_application::{ApiClient, Sandbox, SessionProvider};
use planeats_domain::models::{RegisterRequest, UserPreferencesUpdate};
use planeats_domain::{ApiResponse, Session};
use planeats_infrastructure::{ClientConfig, FileSandboxRepository, SystemClock};
use serde::Serialize;
use tracing::debug;

use crate::cli::{
    AiCommand, Command, MealDbCommand, PantryCommand, PreferencesCommand, RecipesCommand,
    SandboxCommand, ShopCommand,
};

pub type CommandResult = Result<ExitCode, Box<dyn Error>>;

/// Everything a command may need.
pub struct Context {
    pub config: ClientConfig,
    pub api: ApiClient,
    pub session: Arc<SessionProvider>,
}

pub async fn run(ctx: &Context, command: Command) -> CommandResult {
    match command {
        Command::Login { email, password } => login(ctx, &email, &password).await,
        Command::Logout => {
            ctx.session.end_session().await?;
            print_json(&ctx.session.current_session())
        }
        Command::Session => print_json(&ctx.session.current_session()),
        Command::Register {
            username,
            email,
            password,
        } => {
            let request = RegisterRequest {
                username,
                email,
                password,
            };
            emit(ctx.api.register(&request).await)
        }
        Command::Me => emit(ctx.api.current_user().await),
        Command::Preferences(command) => preferences(&ctx.api, command).await,
        Command::Pantry(command) => pantry(&ctx.api, command).await,
        Command::Recipes(command) => recipes(&ctx.api, command).await,
        Command::Ai(command) => ai(&ctx.api, command).await,
        Command::Recommend(args) => emit(ctx.api.recommendations(&args.into()).await),
        Command::Mealdb(command) => mealdb(&ctx.api, command).await,
        Command::Sandbox(command) => sandbox(&ctx.config, command).await,
    }
}

async fn login(ctx: &Context, email: &str, password: &str) -> CommandResult {
    match ctx.session.authenticate(email, password).await {
        Ok(session) => print_json(&session),
        Err(e) => {
            eprintln!("login failed: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn pantry(api: &ApiClient, command: PantryCommand) -> CommandResult {
    match command {
        PantryCommand::List(args) => emit(api.list_pantry_items(&args.into()).await),
        PantryCommand::Add(args) => emit(api.add_pantry_item(&args.into()).await),
        PantryCommand::Update(args) => {
            let (id, update) = args.into_update();
            if update.is_empty() {
                eprintln!("nothing to update: pass at least one field");
                return Ok(ExitCode::FAILURE);
            }
            emit(api.update_pantry_item(id, &update).await)
        }
        PantryCommand::Remove { id } => emit(api.delete_pantry_item(id).await),
    }
}

async fn recipes(api: &ApiClient, command: RecipesCommand) -> CommandResult {
    match command {
        RecipesCommand::List(args) => emit(api.list_recipes(&args.into()).await),
        RecipesCommand::Show { id } => emit(api.get_recipe(id).await),
        RecipesCommand::Mine => emit(api.my_recipes().await),
        RecipesCommand::Suggestions => emit(api.suggested_recipes().await),
        RecipesCommand::Remove { id } => emit(api.delete_recipe(id).await),
    }
}

async fn ai(api: &ApiClient, command: AiCommand) -> CommandResult {
    match command {
        AiCommand::Suggest { items } => emit(api.generate_recipe_suggestions(&items).await),
        AiCommand::Analyze { item } => emit(api.analyze_pantry_item(&item).await),
        AiCommand::Custom(args) => emit(api.generate_custom_recipe(&args.into()).await),
    }
}

async fn preferences(api: &ApiClient, command: PreferencesCommand) -> CommandResult {
    match command {
        PreferencesCommand::Show => emit(api.user_preferences().await),
        PreferencesCommand::Options => emit(api.preference_options().await),
        PreferencesCommand::Set(args) => {
            let update = UserPreferencesUpdate::from(args);
            if update.is_empty() {
                eprintln!("nothing to update: pass at least one field");
                return Ok(ExitCode::FAILURE);
            }
            let options = match api.preference_options().await.into_result() {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {}", e.user_message());
                    return Ok(ExitCode::FAILURE);
                }
            };
            let unknown = options.unknown_values(&update);
            if !unknown.is_empty() {
                eprintln!("unknown preference values: {}", unknown.join(", "));
                return Ok(ExitCode::FAILURE);
            }
            emit(api.update_user_preferences(&update).await)
        }
    }
}

async fn mealdb(api: &ApiClient, command: MealDbCommand) -> CommandResult {
    match command {
        MealDbCommand::Search { name } => emit(api.search_mealdb(&name).await),
        MealDbCommand::Browse(args) => match args.into_search() {
            Some(search) => emit(api.browse_mealdb(&search).await),
            None => {
                eprintln!("pass one of --letter, --ingredient, --category or --area");
                Ok(ExitCode::FAILURE)
            }
        },
        MealDbCommand::Meal { meal_id } => emit(api.mealdb_meal(&meal_id).await),
        MealDbCommand::Surprise => emit(api.random_mealdb_meal().await),
        MealDbCommand::Categories => emit(api.mealdb_categories().await),
        MealDbCommand::Areas => emit(api.mealdb_areas().await),
        MealDbCommand::Ingredients => emit(api.mealdb_ingredients().await),
        MealDbCommand::Suggestions { limit } => emit(api.mealdb_pantry_suggestions(limit).await),
        MealDbCommand::Import { meal_id } => emit(api.import_mealdb_meal(&meal_id).await),
        MealDbCommand::Random => emit(api.import_random_mealdb_meal().await),
    }
}

async fn sandbox(config: &ClientConfig, command: SandboxCommand) -> CommandResult {
    let repo = FileSandboxRepository::new(&config.data_dir);
    debug!(path = %repo.path().display(), "opening sandbox");
    let sandbox = Sandbox::load(Arc::new(repo), Arc::new(SystemClock)).await?;

    match command {
        SandboxCommand::Show => print_json(&sandbox.snapshot().await),
        SandboxCommand::AddIngredient(args) => {
            let draft = args.into();
            let added = sandbox
                .mutate(|state, clock| Ok(state.add_ingredient(draft, clock.now()).clone()))
                .await?;
            print_json(&added)
        }
        SandboxCommand::Search { query } => {
            let found = sandbox
                .read(|state| {
                    state
                        .search_recipes(&query)
                        .into_iter()
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .await;
            print_json(&found)
        }
        SandboxCommand::Shop(ShopCommand::Add {
            name,
            quantity,
            category,
        }) => {
            let added = sandbox
                .mutate(|state, clock| {
                    state
                        .add_shopping_item(&name, &quantity, category.as_deref(), clock.today())
                        .cloned()
                })
                .await?;
            print_json(&added)
        }
        SandboxCommand::Shop(ShopCommand::Done { id }) => {
            let completed = sandbox
                .mutate(|state, _| state.toggle_shopping_item(&id))
                .await?;
            print_json(&serde_json::json!({ "id": id, "completed": completed }))
        }
        SandboxCommand::Shop(ShopCommand::Clear) => {
            let removed = sandbox
                .mutate(|state, _| Ok(state.clear_completed_shopping()))
                .await?;
            print_json(&serde_json::json!({ "removed": removed }))
        }
        SandboxCommand::Reset => {
            sandbox.reset().await?;
            print_json(&sandbox.snapshot().await)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(ExitCode::SUCCESS)
}

fn emit<T: Serialize>(response: ApiResponse<T>) -> CommandResult {
    match response {
        ApiResponse::Data { data, .. } => print_json(&data),
        ApiResponse::Error { error, status } => {
            if status == 0 {
                eprintln!("error: {}", error.user_message());
            } else {
                eprintln!("error ({status}): {}", error.user_message());
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// One-line description of the session for the startup log.
pub fn describe(session: &Session) -> String {
    session.authenticated().map_or_else(
        || session.status().to_string(),
        |s| format!("{} as {}", session.status(), s.email),
    )
}
