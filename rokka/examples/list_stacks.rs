use std::env;

use anyhow::Result;
use rokka::{default_context, Args, Config, Rokka};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let organization = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: list_stacks <organization>"))?;

    let ctx = default_context();
    let rokka = Rokka::new(ctx.clone(), Config::from_env(&ctx));

    let stacks: serde_json::Value = rokka
        .call_json("stacks.list", Args::new().param("organization", organization))
        .await?;
    println!("{}", serde_json::to_string_pretty(&stacks)?);

    Ok(())
}
