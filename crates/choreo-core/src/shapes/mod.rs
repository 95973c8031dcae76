/// Formation generators and the dispatcher that blends between them.
pub mod dispatcher;
pub mod formations;
