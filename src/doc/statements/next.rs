/*!
# `NEXT <variable>`
Also see `FOR`

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
`NEXT` adds the step to the variable and goes back to the line after
the `FOR` unless the limit was passed. The innermost block on the
stack must be a `FOR`; anything else is a `NEXT without FOR` error.

## Example
```text
10 FOR I=1 TO 3
20 PRINT I;
30 NEXT I
RUN
123
```

*/
