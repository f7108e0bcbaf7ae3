// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AuthSession, EmptyMessage, Message, MessageKind, MessageStatus, Offer, OfferStatus,
    ProviderProfile,
};
pub use requests::{
    LoginRequest, OAuthRequest, PhoneStartRequest, PhoneVerifyRequest, PublishOfferRequest,
    RegisterRequest, SearchRequest, SendMessageRequest, VoiceSearchRequest,
};
pub use responses::{
    AuthResponse, ErrorResponse, HealthResponse, PhoneStartResponse, PublishOfferResponse,
    SearchResponse, SendMessageResponse, VoiceSearchResponse,
};
