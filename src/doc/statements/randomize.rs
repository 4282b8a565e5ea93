/*!
# `RANDOMIZE [<expression>]`

## Purpose
Reseeds the generator behind `RND`.

## Remarks
With an expression, the same seed always produces the same sequence.
Without one, the seed comes from the clock. Programs don't need
`RANDOMIZE` to get different numbers on every run.

## Example
```text
RANDOMIZE 42
LET A=RND
RANDOMIZE 42
PRINT A=RND
-1
```

*/
