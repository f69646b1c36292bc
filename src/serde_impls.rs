use core::{
    fmt,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};

use serde::{
    de::{SeqAccess, Visitor},
    ser::{SerializeSeq, Serializer},
    Deserializer, {Deserialize, Serialize},
};

use crate::{ManyToMany, OneToMany, OneToOne};

// All three containers serialize as a flat sequence of pairs; deserializing
// replays the sequence through insert, so each container's own arity rule is
// enforced on the way back in.

pub(crate) struct OneToManyVisitor<L, R, S> {
    marker: PhantomData<fn() -> OneToMany<L, R, S>>,
}

impl<'de, L, R, S> Visitor<'de> for OneToManyVisitor<L, R, S>
where
    L: Deserialize<'de> + Hash + Ord + Clone,
    R: Deserialize<'de> + Hash + Ord + Clone,
    S: BuildHasher + Clone + Default,
{
    type Value = OneToMany<L, R, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a OneToMany")
    }

    fn visit_seq<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: SeqAccess<'de>,
    {
        let mut map: OneToMany<L, R, S> = OneToMany::with_capacity_and_hasher(
            access.size_hint().unwrap_or(0),
            Default::default(),
        );

        while let Some(entry) = access.next_element::<(L, R)>()? {
            map.insert(entry.0, entry.1);
        }

        Ok(map)
    }
}

impl<'de, L, R, S> Deserialize<'de> for OneToMany<L, R, S>
where
    L: Deserialize<'de> + Hash + Ord + Clone,
    R: Deserialize<'de> + Hash + Ord + Clone,
    S: BuildHasher + Clone + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(OneToManyVisitor {
            marker: PhantomData,
        })
    }
}

impl<L, R, H> Serialize for OneToMany<L, R, H>
where
    L: Serialize + Hash + Ord + Clone,
    R: Serialize + Hash + Ord + Clone,
    H: BuildHasher,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_seq(Some(self.len()))?;

        for pair in self.iter() {
            map.serialize_element(&pair)?;
        }

        map.end()
    }
}

pub(crate) struct ManyToManyVisitor<L, R, S> {
    marker: PhantomData<fn() -> ManyToMany<L, R, S>>,
}

impl<'de, L, R, S> Visitor<'de> for ManyToManyVisitor<L, R, S>
where
    L: Deserialize<'de> + Hash + Ord + Clone,
    R: Deserialize<'de> + Hash + Ord + Clone,
    S: BuildHasher + Clone + Default,
{
    type Value = ManyToMany<L, R, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a ManyToMany")
    }

    fn visit_seq<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: SeqAccess<'de>,
    {
        let mut map: ManyToMany<L, R, S> = ManyToMany::with_capacity_and_hasher(
            access.size_hint().unwrap_or(0),
            Default::default(),
        );

        while let Some(entry) = access.next_element::<(L, R)>()? {
            map.insert(entry.0, entry.1);
        }

        Ok(map)
    }
}

impl<'de, L, R, S> Deserialize<'de> for ManyToMany<L, R, S>
where
    L: Deserialize<'de> + Hash + Ord + Clone,
    R: Deserialize<'de> + Hash + Ord + Clone,
    S: BuildHasher + Clone + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ManyToManyVisitor {
            marker: PhantomData,
        })
    }
}

impl<L, R, H> Serialize for ManyToMany<L, R, H>
where
    L: Serialize + Hash + Ord + Clone,
    R: Serialize + Hash + Ord + Clone,
    H: BuildHasher,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_seq(Some(self.len()))?;

        for pair in self.iter() {
            map.serialize_element(&pair)?;
        }

        map.end()
    }
}

pub(crate) struct OneToOneVisitor<L, R, S> {
    marker: PhantomData<fn() -> OneToOne<L, R, S>>,
}

impl<'de, L, R, S> Visitor<'de> for OneToOneVisitor<L, R, S>
where
    L: Deserialize<'de> + Hash + Ord + Clone,
    R: Deserialize<'de> + Hash + Ord + Clone,
    S: BuildHasher + Clone + Default,
{
    type Value = OneToOne<L, R, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a OneToOne")
    }

    fn visit_seq<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: SeqAccess<'de>,
    {
        let mut map: OneToOne<L, R, S> = OneToOne::with_capacity_and_hasher(
            access.size_hint().unwrap_or(0),
            Default::default(),
        );

        while let Some(entry) = access.next_element::<(L, R)>()? {
            map.insert(entry.0, entry.1);
        }

        Ok(map)
    }
}

impl<'de, L, R, S> Deserialize<'de> for OneToOne<L, R, S>
where
    L: Deserialize<'de> + Hash + Ord + Clone,
    R: Deserialize<'de> + Hash + Ord + Clone,
    S: BuildHasher + Clone + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(OneToOneVisitor {
            marker: PhantomData,
        })
    }
}

impl<L, R, H> Serialize for OneToOne<L, R, H>
where
    L: Serialize + Hash + Ord + Clone,
    R: Serialize + Hash + Ord + Clone,
    H: BuildHasher,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_seq(Some(self.len()))?;

        for pair in self.iter() {
            map.serialize_element(&pair)?;
        }

        map.end()
    }
}
