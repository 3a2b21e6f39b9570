pub mod base {
    pub mod bulb_id;
    pub mod group;
    pub mod remote_type;
    pub mod status;
}

pub mod state {
    pub mod group_state;
}

pub mod formatter {
    pub mod decoder;
    pub mod packet;
    pub mod packet_formatter;
    pub mod protocol;
    pub mod settings;
    pub mod step;
}

pub mod protocols {
    pub mod casalux;
}

pub mod utils {
    pub mod hex;
}

pub mod error;

pub type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
