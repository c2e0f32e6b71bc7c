//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, PaginatedResponse};
use super::modules::home::HealthState;
use super::modules::request_id::request_id_middleware;
use super::modules::{auth, clients, home, hotels, roles, rooms, stays, users};
use crate::application::{AccountService, OccupancyService, RecordService};
use crate::auth::JwtConfig;
use crate::domain::{Client, Hotel, RepositoryProvider, Role, Room, User};
use crate::infrastructure::SeaOrmRepositoryProvider;

/// State shared by every route. Handlers extract only the service they need
/// through `FromRef`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub users: RecordService<User>,
    pub clients: RecordService<Client>,
    pub hotels: RecordService<Hotel>,
    pub rooms: RecordService<Room>,
    pub roles: RecordService<Role>,
    pub accounts: AccountService,
    pub occupancy: OccupancyService,
    pub health: HealthState,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt_config: JwtConfig) -> Self {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        Self {
            users: RecordService::new(repos.clone()),
            clients: RecordService::new(repos.clone()),
            hotels: RecordService::new(repos.clone()),
            rooms: RecordService::new(repos.clone()),
            roles: RecordService::new(repos.clone()),
            accounts: AccountService::new(repos.clone(), jwt_config),
            occupancy: OccupancyService::new(repos),
            health: HealthState {
                db,
                started_at: Arc::new(Instant::now()),
            },
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // Home
        home::home,
        home::health_check,
        // Auth
        auth::login,
        auth::current_user,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::approve_user,
        // Clients
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        // Hotels
        hotels::list_hotels,
        hotels::get_hotel,
        hotels::create_hotel,
        hotels::update_hotel,
        hotels::delete_hotel,
        // Rooms
        rooms::list_rooms,
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::delete_room,
        // Roles
        roles::list_roles,
        roles::get_role,
        roles::create_role,
        roles::update_role,
        roles::delete_role,
        // Stays
        stays::list_check_ins,
        stays::get_check_in,
        stays::check_in,
        stays::check_out,
        stays::list_check_outs,
        stays::get_check_out,
    ),
    components(
        schemas(
            ApiResponse<String>,
            PaginatedResponse<users::UserDto>,
            home::ServiceInfo,
            home::HealthResponse,
            home::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            users::UserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            clients::ClientDto,
            clients::CreateClientRequest,
            clients::UpdateClientRequest,
            hotels::HotelDto,
            hotels::CreateHotelRequest,
            hotels::UpdateHotelRequest,
            rooms::RoomDto,
            rooms::CreateRoomRequest,
            rooms::UpdateRoomRequest,
            roles::RoleDto,
            roles::CreateRoleRequest,
            roles::UpdateRoleRequest,
            stays::CheckInDto,
            stays::CheckOutDto,
            stays::CreateCheckInRequest,
            stays::CreateCheckOutRequest,
        )
    ),
    tags(
        (name = "Home", description = "Service information and health check"),
        (name = "Authentication", description = "Staff login (JWT)"),
        (name = "Users", description = "Staff accounts and approval"),
        (name = "Clients", description = "Guest registration"),
        (name = "Hotels", description = "Hotel management"),
        (name = "Rooms", description = "Room management; occupancy is read-only here"),
        (name = "Roles", description = "Staff roles"),
        (name = "Stays", description = "Check-in / check-out workflow"),
    ),
    info(
        title = "Roomee API",
        version = "0.1.0",
        description = "Hotel front-desk backend: staff, guests, hotels, rooms and stays"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/{id}/approve", post(users::approve_user));

    let client_routes = Router::new()
        .route("/", get(clients::list_clients).post(clients::create_client))
        .route(
            "/{id}",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        );

    let hotel_routes = Router::new()
        .route("/", get(hotels::list_hotels).post(hotels::create_hotel))
        .route(
            "/{id}",
            get(hotels::get_hotel)
                .put(hotels::update_hotel)
                .delete(hotels::delete_hotel),
        );

    let room_routes = Router::new()
        .route("/", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/{id}",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        );

    let role_routes = Router::new()
        .route("/", get(roles::list_roles).post(roles::create_role))
        .route(
            "/{id}",
            get(roles::get_role)
                .put(roles::update_role)
                .delete(roles::delete_role),
        );

    let check_in_routes = Router::new()
        .route("/", get(stays::list_check_ins).post(stays::check_in))
        .route("/{id}", get(stays::get_check_in))
        .route("/{id}/check-out", post(stays::check_out));

    let check_out_routes = Router::new()
        .route("/", get(stays::list_check_outs))
        .route("/{id}", get(stays::get_check_out));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/", get(home::home))
        .route("/health", get(home::health_check))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::current_user))
        .nest("/users", user_routes)
        .nest("/clients", client_routes)
        .nest("/hotels", hotel_routes)
        .nest("/rooms", room_routes)
        .nest("/roles", role_routes)
        .nest("/check-ins", check_in_routes)
        .nest("/check-outs", check_out_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}
