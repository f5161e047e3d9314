use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct VerifyTokenRequestBody<'a> {
    pub token: &'a str,
}
